use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::errors::ConfigError;
use crate::domain::rules::{contains, contains_any};
use crate::domain::traits::ConfigStore;
use crate::infrastructure::config::Config;

/// Owns the running configuration and its persistence.
///
/// Readers take snapshots; `add_allowed_roles` is the only writer and holds
/// the write lock across append and save.
pub struct ConfigService {
    config: RwLock<Config>,
    store: Arc<dyn ConfigStore>,
}

impl ConfigService {
    pub fn new(config: Config, store: Arc<dyn ConfigStore>) -> Self {
        Self {
            config: RwLock::new(config),
            store,
        }
    }

    pub async fn is_bot_channel(&self, channel_id: &str) -> bool {
        self.config.read().await.is_bot_channel(channel_id)
    }

    /// True if any of the member's roles is an admin role
    pub async fn is_admin(&self, member_roles: &[String]) -> bool {
        contains_any(&self.config.read().await.roles.admins, member_roles)
    }

    pub async fn is_admin_role(&self, role_id: &str) -> bool {
        self.config.read().await.is_admin_role(role_id)
    }

    pub async fn is_allowed_role(&self, role_id: &str) -> bool {
        self.config.read().await.is_allowed_role(role_id)
    }

    pub async fn allowed_roles(&self) -> Vec<String> {
        self.config.read().await.roles.allowed.clone()
    }

    /// Append role ids to the self-assignable list and persist.
    ///
    /// All ids are checked before anything is appended; ids already present
    /// are skipped. Returns how many were added. A failed save is logged and
    /// the in-memory list stays authoritative.
    pub async fn add_allowed_roles(&self, role_ids: &[String]) -> Result<usize, ConfigError> {
        let mut config = self.config.write().await;

        if let Some(admin) = role_ids.iter().find(|id| config.is_admin_role(id)) {
            return Err(ConfigError::AdminRoleNotAssignable(admin.clone()));
        }

        let mut added = 0;
        for id in role_ids {
            if !contains(&config.roles.allowed, id) {
                config.roles.allowed.push(id.clone());
                added += 1;
            }
        }

        if added == 0 {
            return Ok(0);
        }

        tracing::info!(added, total = config.roles.allowed.len(), "Self-assignable roles updated");
        if let Err(e) = self.store.save(&config).await {
            tracing::error!("Failed to persist config, keeping in-memory roles: {}", e);
        }

        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use crate::application::errors::StorageError;

    #[derive(Default)]
    struct RecordingStore {
        saved: Mutex<Vec<Config>>,
        fail: bool,
    }

    #[async_trait]
    impl ConfigStore for RecordingStore {
        fn load(&self) -> Result<Config, ConfigError> {
            Ok(Config::default())
        }

        async fn save(&self, config: &Config) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Io(std::io::Error::other("disk full")));
            }
            self.saved.lock().unwrap().push(config.clone());
            Ok(())
        }
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.roles.admins = vec!["A".to_string()];
        config.roles.allowed = vec!["R1".to_string()];
        config
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_add_allowed_roles_persists() {
        let store = Arc::new(RecordingStore::default());
        let service = ConfigService::new(config(), store.clone());

        assert_eq!(service.add_allowed_roles(&ids(&["R2", "R1"])).await.unwrap(), 1);
        assert_eq!(service.allowed_roles().await, ids(&["R1", "R2"]));

        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].roles.allowed, ids(&["R1", "R2"]));
    }

    #[tokio::test]
    async fn test_admin_role_rejected_without_mutation() {
        let store = Arc::new(RecordingStore::default());
        let service = ConfigService::new(config(), store.clone());

        let result = service.add_allowed_roles(&ids(&["R2", "A"])).await;
        assert!(matches!(result, Err(ConfigError::AdminRoleNotAssignable(id)) if id == "A"));
        assert_eq!(service.allowed_roles().await, ids(&["R1"]));
        assert!(store.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_nothing_new_skips_save() {
        let store = Arc::new(RecordingStore::default());
        let service = ConfigService::new(config(), store.clone());

        assert_eq!(service.add_allowed_roles(&ids(&["R1"])).await.unwrap(), 0);
        assert!(store.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_failure_keeps_memory_state() {
        let store = Arc::new(RecordingStore { fail: true, ..Default::default() });
        let service = ConfigService::new(config(), store);

        assert_eq!(service.add_allowed_roles(&ids(&["R2"])).await.unwrap(), 1);
        assert!(service.is_allowed_role("R2").await);
    }

    #[tokio::test]
    async fn test_is_admin() {
        let service = ConfigService::new(config(), Arc::new(RecordingStore::default()));
        assert!(service.is_admin(&ids(&["X", "A"])).await);
        assert!(!service.is_admin(&ids(&["R1"])).await);
        assert!(!service.is_admin(&[]).await);
    }
}
