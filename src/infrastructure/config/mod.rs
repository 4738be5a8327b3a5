//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::application::errors::ConfigError;
use crate::domain::rules::contains;

/// Prefix used when the config leaves it out or empty
pub const DEFAULT_PREFIX: &str = "!";

/// Bot configuration, stored as a JSON object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub token: String,
    #[serde(rename = "botchannels", default)]
    pub bot_channels: Vec<String>,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub roles: RolesConfig,
}

/// Role policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RolesConfig {
    /// Holders of these roles may register self-assignable roles
    #[serde(default)]
    pub admins: Vec<String>,
    /// Self-assignable roles
    #[serde(default)]
    pub allowed: Vec<String>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            bot_channels: Vec::new(),
            prefix: default_prefix(),
            roles: RolesConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Read(e.to_string()))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.sanitize();
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Apply `BOT_TOKEN` / `BOT_PREFIX` overrides from the environment
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("BOT_TOKEN") {
            if !token.is_empty() {
                self.token = token;
            }
        }

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            if !prefix.is_empty() {
                self.prefix = prefix;
            }
        }
    }

    /// Fail if the config cannot be used to connect
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::MissingField("token".to_string()));
        }
        Ok(())
    }

    /// Restore the invariants a hand-edited file may break
    fn sanitize(&mut self) {
        if self.prefix.is_empty() {
            self.prefix = default_prefix();
        }

        let admins = &self.roles.admins;
        let before = self.roles.allowed.len();
        self.roles.allowed.retain(|id| !contains(admins, id));
        if self.roles.allowed.len() != before {
            tracing::warn!(
                dropped = before - self.roles.allowed.len(),
                "Admin roles listed as self-assignable; ignoring them"
            );
        }
    }

    pub fn is_bot_channel(&self, channel_id: &str) -> bool {
        contains(&self.bot_channels, channel_id)
    }

    pub fn is_admin_role(&self, role_id: &str) -> bool {
        contains(&self.roles.admins, role_id)
    }

    pub fn is_allowed_role(&self, role_id: &str) -> bool {
        contains(&self.roles.allowed, role_id)
    }
}
