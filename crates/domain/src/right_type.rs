use std::fmt::{Display, Formatter};
use std::str::FromStr;

use lmis_core::AppError;
use serde::{Deserialize, Serialize};

/// Category of rights granted by a role.
///
/// A role belongs to exactly one right type, and the right type decides
/// which scope fields an assignment of that role carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RightType {
    /// Rights scoped to a program and, optionally, a supervisory node.
    Supervision,
    /// Rights scoped to a supplying warehouse.
    OrderFulfillment,
    /// Reporting rights without scope.
    Reports,
    /// System administration rights without scope.
    GeneralAdmin,
}

/// Scope fields the add form collects for a right type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeRequirements {
    /// Program selection is required.
    pub program: bool,
    /// Supervisory node selection is offered but optional.
    pub supervisory_node: bool,
    /// Warehouse selection is required.
    pub warehouse: bool,
}

impl RightType {
    /// Returns a stable transport value for this right type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supervision => "SUPERVISION",
            Self::OrderFulfillment => "ORDER_FULFILLMENT",
            Self::Reports => "REPORTS",
            Self::GeneralAdmin => "GENERAL_ADMIN",
        }
    }

    /// Returns all right types in console tab order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[RightType] = &[
            RightType::Supervision,
            RightType::Reports,
            RightType::GeneralAdmin,
            RightType::OrderFulfillment,
        ];

        ALL
    }

    /// Returns the scope fields assignments of this right type carry.
    #[must_use]
    pub fn scope_requirements(&self) -> ScopeRequirements {
        match self {
            Self::Supervision => ScopeRequirements {
                program: true,
                supervisory_node: true,
                warehouse: false,
            },
            Self::OrderFulfillment => ScopeRequirements {
                program: false,
                supervisory_node: false,
                warehouse: true,
            },
            Self::Reports | Self::GeneralAdmin => ScopeRequirements {
                program: false,
                supervisory_node: false,
                warehouse: false,
            },
        }
    }
}

impl Display for RightType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for RightType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SUPERVISION" => Ok(Self::Supervision),
            "ORDER_FULFILLMENT" => Ok(Self::OrderFulfillment),
            "REPORTS" => Ok(Self::Reports),
            "GENERAL_ADMIN" => Ok(Self::GeneralAdmin),
            _ => Err(AppError::Validation(format!(
                "unknown right type '{value}'"
            ))),
        }
    }
}

/// The right type tab a caller is working on.
///
/// Callers hand over whatever tab value they received. Unknown values are
/// kept so add and remove can apply their fallbacks instead of failing at
/// parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RightTypeSelector {
    /// One of the known right types.
    Known(RightType),
    /// A tab value outside the known set.
    Unrecognized(String),
}

impl RightTypeSelector {
    /// Classifies a transport value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        RightType::from_str(value)
            .map(Self::Known)
            .unwrap_or_else(|_| Self::Unrecognized(value.to_owned()))
    }

    /// Returns the known right type, if any.
    #[must_use]
    pub fn right_type(&self) -> Option<RightType> {
        match self {
            Self::Known(right_type) => Some(*right_type),
            Self::Unrecognized(_) => None,
        }
    }

    /// Returns the transport value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(right_type) => right_type.as_str(),
            Self::Unrecognized(value) => value.as_str(),
        }
    }
}

impl From<RightType> for RightTypeSelector {
    fn from(value: RightType) -> Self {
        Self::Known(value)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{RightType, RightTypeSelector};

    #[test]
    fn right_type_roundtrip_transport_value() {
        for right_type in RightType::all() {
            let restored = RightType::from_str(right_type.as_str());
            assert!(restored.is_ok());
            assert_eq!(
                restored.unwrap_or(RightType::Reports),
                *right_type
            );
        }
    }

    #[test]
    fn tab_order_starts_with_supervision() {
        assert_eq!(RightType::all().len(), 4);
        assert_eq!(RightType::all()[0], RightType::Supervision);
        assert_eq!(RightType::all()[3], RightType::OrderFulfillment);
    }

    #[test]
    fn unknown_right_type_is_rejected() {
        assert!(RightType::from_str("supervision").is_err());
    }

    #[test]
    fn selector_keeps_unknown_values() {
        let selector = RightTypeSelector::parse("FISCAL");
        assert_eq!(selector, RightTypeSelector::Unrecognized("FISCAL".to_owned()));
        assert_eq!(selector.right_type(), None);
        assert_eq!(selector.as_str(), "FISCAL");
    }

    #[test]
    fn only_supervision_and_fulfillment_carry_scope() {
        let supervision = RightType::Supervision.scope_requirements();
        assert!(supervision.program && supervision.supervisory_node && !supervision.warehouse);

        let fulfillment = RightType::OrderFulfillment.scope_requirements();
        assert!(fulfillment.warehouse && !fulfillment.program);

        let reports = RightType::Reports.scope_requirements();
        assert!(!reports.program && !reports.supervisory_node && !reports.warehouse);
    }

    #[test]
    fn serializes_as_screaming_snake_case() {
        let value = serde_json::to_string(&RightType::OrderFulfillment);
        assert_eq!(value.unwrap_or_default(), "\"ORDER_FULFILLMENT\"");
    }
}
