//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_backend_client;
mod in_memory_reference_data_repository;
mod in_memory_user_repository;

pub use http_backend_client::{HttpBackendClient, HttpBackendConfig};
pub use in_memory_reference_data_repository::InMemoryReferenceDataRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
