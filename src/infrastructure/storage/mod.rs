//! File-based config storage

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::traits::ConfigStore;
use crate::infrastructure::config::Config;
use crate::application::errors::{ConfigError, StorageError};

/// JSON file-based config store
///
/// Saves go to a sibling temp file which is then renamed over the target,
/// so a failed write never leaves a truncated config behind.
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Result<Config, ConfigError> {
        Config::load(&self.path)
    }

    async fn save(&self, config: &Config) -> Result<(), StorageError> {
        let json = config.to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json.as_bytes()).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), "Config saved");
        Ok(())
    }
}
