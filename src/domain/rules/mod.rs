//! Domain rules - Pure predicates used to gate commands

pub mod permissions;

pub use permissions::{contains, contains_any, find_role_by_id, find_role_by_name};
