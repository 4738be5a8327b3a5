//! Shared fixtures: an in-memory guild and config store

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use rolebot::application::errors::{BotError, ConfigError, StorageError};
use rolebot::application::messaging::{DeletionScheduler, MessageDispatcher};
use rolebot::application::services::{CommandService, ConfigService};
use rolebot::domain::entities::{Member, Message, Role};
use rolebot::domain::traits::{ConfigStore, Platform};
use rolebot::infrastructure::config::Config;

pub const BOT_ID: &str = "1";
pub const GUILD: &str = "500";
pub const BOT_CHANNEL: &str = "100";
pub const OTHER_CHANNEL: &str = "200";
pub const USER: &str = "42";
pub const ADMIN: &str = "43";
pub const ADMIN_ROLE: &str = "900";

/// Guild state plus a record of every side effect
#[derive(Default)]
pub struct MockPlatform {
    pub roles: Mutex<Vec<Role>>,
    pub members: Mutex<HashMap<String, Member>>,
    pub sent: Mutex<Vec<(String, String)>>,
    pub reactions: Mutex<Vec<(String, String)>>,
    pub deleted: Mutex<Vec<String>>,
    pub fail_roles: bool,
}

impl MockPlatform {
    pub fn new(roles: Vec<Role>, members: Vec<Member>) -> Self {
        Self {
            roles: Mutex::new(roles),
            members: Mutex::new(members.into_iter().map(|m| (m.user_id.clone(), m)).collect()),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|(_, text)| text.clone()).collect()
    }

    pub fn reactions(&self) -> Vec<String> {
        self.reactions.lock().unwrap().iter().map(|(_, emoji)| emoji.clone()).collect()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn member_roles(&self, user_id: &str) -> Vec<String> {
        self.members.lock().unwrap().get(user_id).map(|m| m.roles.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn current_user_id(&self) -> Result<String, BotError> {
        Ok(BOT_ID.to_string())
    }

    async fn member(&self, _guild_id: &str, user_id: &str) -> Result<Member, BotError> {
        self.members
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| BotError::Platform("Unknown Member".to_string()))
    }

    async fn guild_roles(&self, _guild_id: &str) -> Result<Vec<Role>, BotError> {
        if self.fail_roles {
            return Err(BotError::Platform("Missing Access".to_string()));
        }
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn add_role(&self, _guild_id: &str, user_id: &str, role_id: &str) -> Result<(), BotError> {
        if let Some(member) = self.members.lock().unwrap().get_mut(user_id) {
            member.roles.push(role_id.to_string());
        }
        Ok(())
    }

    async fn remove_role(&self, _guild_id: &str, user_id: &str, role_id: &str) -> Result<(), BotError> {
        if let Some(member) = self.members.lock().unwrap().get_mut(user_id) {
            member.roles.retain(|r| r != role_id);
        }
        Ok(())
    }

    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), BotError> {
        self.sent.lock().unwrap().push((channel_id.to_string(), text.to_string()));
        Ok(())
    }

    async fn react(&self, _channel_id: &str, message_id: &str, emoji: &str) -> Result<(), BotError> {
        self.reactions.lock().unwrap().push((message_id.to_string(), emoji.to_string()));
        Ok(())
    }

    async fn delete_message(&self, _channel_id: &str, message_id: &str) -> Result<(), BotError> {
        self.deleted.lock().unwrap().push(message_id.to_string());
        Ok(())
    }
}

/// Config store that keeps every save in memory
#[derive(Default)]
pub struct MemoryStore {
    pub saved: Mutex<Vec<Config>>,
}

#[async_trait]
impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<Config, ConfigError> {
        self.saved
            .lock()
            .unwrap()
            .last()
            .cloned()
            .ok_or_else(|| ConfigError::Read("nothing saved".to_string()))
    }

    async fn save(&self, config: &Config) -> Result<(), StorageError> {
        self.saved.lock().unwrap().push(config.clone());
        Ok(())
    }
}

/// Guild roles: R1 "Neuro", R2 "He/Him", R3 "She/Her", 900 "Mod" (admin)
pub fn guild_roles() -> Vec<Role> {
    vec![
        Role::new("R1", "Neuro").with_position(1),
        Role::new("R2", "He/Him").with_position(2),
        Role::new("R3", "She/Her").with_position(3),
        Role::new(ADMIN_ROLE, "Mod").with_position(10),
    ]
}

pub fn members() -> Vec<Member> {
    vec![
        Member::new(USER, "alice"),
        Member::new(ADMIN, "root").with_nick("Boss").with_roles(vec![ADMIN_ROLE.to_string()]),
    ]
}

pub fn config(allowed: &[&str]) -> Config {
    let mut config = Config::default();
    config.token = "token".to_string();
    config.bot_channels = vec![BOT_CHANNEL.to_string()];
    config.roles.admins = vec![ADMIN_ROLE.to_string()];
    config.roles.allowed = allowed.iter().map(|s| s.to_string()).collect();
    config
}

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub struct Harness {
    pub dispatcher: MessageDispatcher,
    pub platform: Arc<MockPlatform>,
    pub config: Arc<ConfigService>,
    pub store: Arc<MemoryStore>,
}

impl Harness {
    pub fn new(config: Config, platform: MockPlatform) -> Self {
        ensure_init();
        let store = Arc::new(MemoryStore::default());
        let prefix = config.prefix.clone();
        let config = Arc::new(ConfigService::new(config, store.clone()));
        let commands = CommandService::with_defaults(prefix, Arc::clone(&config));
        let dispatcher = MessageDispatcher::new(
            Arc::clone(&config),
            commands,
            DeletionScheduler::new(Duration::from_secs(2)),
        );
        Self {
            dispatcher,
            platform: Arc::new(platform),
            config,
            store,
        }
    }

    pub fn standard(allowed: &[&str]) -> Self {
        Self::new(config(allowed), MockPlatform::new(guild_roles(), members()))
    }

    pub async fn send(&self, id: &str, channel: &str, author: &str, text: &str) -> rolebot::application::messaging::DispatchOutcome {
        let message = Message::new(id, channel, author, text).with_guild(GUILD);
        self.dispatcher.dispatch(self.platform.clone(), message).await
    }
}
