use async_trait::async_trait;
use crate::domain::entities::{Member, Role};
use crate::application::errors::BotError;

/// Platform trait - abstraction over the chat gateway client
///
/// Ids are the platform's snowflakes rendered as strings.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Id of the account the bot is logged in as
    async fn current_user_id(&self) -> Result<String, BotError>;

    /// Fetch a guild member with nickname and role memberships
    async fn member(&self, guild_id: &str, user_id: &str) -> Result<Member, BotError>;

    /// Fetch the guild's role list
    async fn guild_roles(&self, guild_id: &str) -> Result<Vec<Role>, BotError>;

    async fn add_role(&self, guild_id: &str, user_id: &str, role_id: &str) -> Result<(), BotError>;

    async fn remove_role(&self, guild_id: &str, user_id: &str, role_id: &str) -> Result<(), BotError>;

    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), BotError>;

    async fn react(&self, channel_id: &str, message_id: &str, emoji: &str) -> Result<(), BotError>;

    async fn delete_message(&self, channel_id: &str, message_id: &str) -> Result<(), BotError>;
}
