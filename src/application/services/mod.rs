//! Application services - Business logic orchestration

pub mod command_service;
pub mod config_service;
pub mod role_service;

pub use command_service::CommandService;
pub use config_service::ConfigService;
pub use role_service::{HandlerResult, RoleService, REACTION_DENIED};
