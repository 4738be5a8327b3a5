//! Domain layer - Core business logic, free of platform and storage crates
//!
//! Trait signatures borrow the application error types and the `Config`
//! model; nothing here talks to Discord or the filesystem.
//! 
//! This layer contains:
//! - Entities: Core business objects (Member, Role, Message, Command)
//! - Traits: Abstractions for infrastructure (Platform, ConfigStore)
//! - Rules: Permission predicates

pub mod entities;
pub mod rules;
pub mod traits;
