//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Config ownership, role handlers, command execution
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing, dispatching, deferred deletion

pub mod errors;
pub mod services;
pub mod messaging;
