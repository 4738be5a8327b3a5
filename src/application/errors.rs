//! Application layer errors

use thiserror::Error;

/// Failures talking to the chat platform
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Platform error: {0}")]
    Platform(String),
}

/// Command execution errors, shown to the invoking user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command {0} not found!")]
    NotFound(String),

    #[error("Sorry {invoker}, I could not find the role {role}!")]
    RoleNotFound { invoker: String, role: String },

    #[error("Sorry {invoker}, I could not find the role id {role_id}!")]
    RoleIdNotFound { invoker: String, role_id: String },

    #[error("I'm sorry {invoker}, I'm afraid I can't do that.")]
    PermissionDenied { invoker: String },

    #[error("Sorry {invoker}, adding an admin role as settable is a dangerous operation; and thus is not permitted.")]
    DangerousOperation { invoker: String },

    #[error("{0}")]
    Platform(String),
}

impl From<BotError> for CommandError {
    fn from(err: BotError) -> Self {
        CommandError::Platform(err.to_string())
    }
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Role {0} is an admin role and cannot be self-assignable")]
    AdminRoleNotAssignable(String),
}
