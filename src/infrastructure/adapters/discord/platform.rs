//! Platform implementation over serenity's REST client

use async_trait::async_trait;
use serenity::all::{ChannelId, GuildId, Http, MessageId, ReactionType, RoleId, UserId};
use std::sync::Arc;

use crate::application::errors::BotError;
use crate::domain::entities::{Member, Role};
use crate::domain::traits::Platform;

/// Discord platform adapter
pub struct SerenityPlatform {
    http: Arc<Http>,
    bot_user_id: Option<u64>,
}

impl SerenityPlatform {
    /// `bot_user_id` is the id seen on `ready`; when absent it is fetched on demand
    pub fn new(http: Arc<Http>, bot_user_id: Option<u64>) -> Self {
        Self { http, bot_user_id }
    }
}

/// Parse a snowflake id; zero is not a valid id
fn snowflake(raw: &str) -> Result<u64, BotError> {
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(BotError::Platform(format!("Invalid id: {}", raw))),
        Ok(id) => Ok(id),
    }
}

fn platform_err(e: serenity::Error) -> BotError {
    BotError::Platform(e.to_string())
}

#[async_trait]
impl Platform for SerenityPlatform {
    async fn current_user_id(&self) -> Result<String, BotError> {
        if let Some(id) = self.bot_user_id {
            return Ok(id.to_string());
        }
        let me = self.http.get_current_user().await.map_err(platform_err)?;
        Ok(me.id.to_string())
    }

    async fn member(&self, guild_id: &str, user_id: &str) -> Result<Member, BotError> {
        let guild = GuildId::new(snowflake(guild_id)?);
        let user = UserId::new(snowflake(user_id)?);

        let member = self.http.get_member(guild, user).await.map_err(platform_err)?;

        Ok(Member {
            user_id: member.user.id.to_string(),
            username: member.user.name.clone(),
            nick: member.nick.clone(),
            roles: member.roles.iter().map(|r| r.to_string()).collect(),
        })
    }

    async fn guild_roles(&self, guild_id: &str) -> Result<Vec<Role>, BotError> {
        let guild = GuildId::new(snowflake(guild_id)?);
        let roles = self.http.get_guild_roles(guild).await.map_err(platform_err)?;

        Ok(roles
            .into_iter()
            .map(|r| Role::new(r.id.to_string(), r.name).with_position(r.position))
            .collect())
    }

    async fn add_role(&self, guild_id: &str, user_id: &str, role_id: &str) -> Result<(), BotError> {
        self.http
            .add_member_role(
                GuildId::new(snowflake(guild_id)?),
                UserId::new(snowflake(user_id)?),
                RoleId::new(snowflake(role_id)?),
                None,
            )
            .await
            .map_err(platform_err)
    }

    async fn remove_role(&self, guild_id: &str, user_id: &str, role_id: &str) -> Result<(), BotError> {
        self.http
            .remove_member_role(
                GuildId::new(snowflake(guild_id)?),
                UserId::new(snowflake(user_id)?),
                RoleId::new(snowflake(role_id)?),
                None,
            )
            .await
            .map_err(platform_err)
    }

    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), BotError> {
        let channel = ChannelId::new(snowflake(channel_id)?);
        channel.say(&self.http, text).await.map_err(platform_err)?;
        Ok(())
    }

    async fn react(&self, channel_id: &str, message_id: &str, emoji: &str) -> Result<(), BotError> {
        let reaction = ReactionType::Unicode(emoji.to_string());
        self.http
            .create_reaction(
                ChannelId::new(snowflake(channel_id)?),
                MessageId::new(snowflake(message_id)?),
                &reaction,
            )
            .await
            .map_err(platform_err)
    }

    async fn delete_message(&self, channel_id: &str, message_id: &str) -> Result<(), BotError> {
        self.http
            .delete_message(
                ChannelId::new(snowflake(channel_id)?),
                MessageId::new(snowflake(message_id)?),
                None,
            )
            .await
            .map_err(platform_err)
    }
}
