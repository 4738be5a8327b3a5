use async_trait::async_trait;
use crate::application::errors::{ConfigError, StorageError};
use crate::infrastructure::config::Config;

/// Store trait - abstraction for configuration persistence
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the persisted configuration
    fn load(&self) -> Result<Config, ConfigError>;

    /// Persist the configuration, replacing the previous copy
    async fn save(&self, config: &Config) -> Result<(), StorageError>;
}
