//! Application services and ports.

#![forbid(unsafe_code)]

mod role_assignment_editor;
mod user_roles_ports;
mod user_roles_service;

pub use role_assignment_editor::{Notification, NotificationLevel, RoleAssignmentEditor};
pub use user_roles_ports::{
    AddFormOptions, DEFAULT_ASSIGNMENT_PAGE_SIZE, ImportSummary, MAX_ASSIGNMENT_PAGE_SIZE,
    ReferenceDataRepository, RoleAssignmentPage, RoleAssignmentQuery, UserRepository,
};
pub use user_roles_service::UserRolesService;
