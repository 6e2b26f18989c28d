pub mod health;
pub mod role_assignments;
pub mod users;
