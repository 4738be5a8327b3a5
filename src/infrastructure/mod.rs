//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: Config persistence
//! - Adapters: Platform integrations (Discord)

pub mod config;
pub mod storage;
pub mod adapters;
