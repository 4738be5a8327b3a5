//! Discord event handler for serenity.

use once_cell::sync::OnceCell;
use serenity::all::{
    ActivityData, ChannelId, Context, EventHandler, GatewayIntents, GuildId, Message as DiscordMessage,
    MessageId, Ready,
};
use serenity::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::application::messaging::MessageDispatcher;
use crate::domain::entities::Message;
use super::platform::SerenityPlatform;

/// Handler for Discord gateway events
pub struct DiscordHandler {
    dispatcher: Arc<MessageDispatcher>,
    bot_user_id: OnceCell<u64>,
}

impl DiscordHandler {
    pub fn new(dispatcher: Arc<MessageDispatcher>) -> Self {
        Self {
            dispatcher,
            bot_user_id: OnceCell::new(),
        }
    }

    /// Required gateway intents for the bot.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }
}

fn to_domain(msg: &DiscordMessage) -> Message {
    let message = Message::new(
        msg.id.to_string(),
        msg.channel_id.to_string(),
        msg.author.id.to_string(),
        msg.content.clone(),
    );
    match msg.guild_id {
        Some(guild_id) => message.with_guild(guild_id.to_string()),
        None => message,
    }
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            bot_name = %ready.user.name,
            guilds = ready.guilds.len(),
            "discord bot ready"
        );

        let _ = self.bot_user_id.set(ready.user.id.get());
        ctx.set_activity(Some(ActivityData::playing(format!(
            "Say {}help for help",
            self.dispatcher.prefix()
        ))));
    }

    async fn message(&self, ctx: Context, msg: DiscordMessage) {
        let platform = Arc::new(SerenityPlatform::new(
            ctx.http.clone(),
            self.bot_user_id.get().copied(),
        ));
        self.dispatcher.dispatch(platform, to_domain(&msg)).await;
    }

    async fn message_delete(
        &self,
        _ctx: Context,
        _channel_id: ChannelId,
        deleted_message_id: MessageId,
        _guild_id: Option<GuildId>,
    ) {
        self.dispatcher.message_deleted(&deleted_message_id.to_string());
    }
}
