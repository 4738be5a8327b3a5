//! Message dispatcher - Routes prefixed messages to command handlers
//!
//! Per message: own-message check, prefix check, member lookup, channel
//! check, parse, registry lookup, handler, then reply and reaction.

use std::sync::Arc;

use crate::application::errors::CommandError;
use crate::application::services::{CommandService, ConfigService, REACTION_DENIED};
use crate::domain::entities::Message;
use crate::domain::traits::Platform;
use super::context::CommandContext;
use super::parser::MessageParser;
use super::scheduler::DeletionScheduler;

/// Reaction acknowledging a successful command
pub const REACTION_OK: &str = "✅";

/// Where a message ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not a command, or sent by the bot itself
    Ignored,
    /// Member or bot identity could not be resolved
    Aborted,
    /// Command in a channel outside the allow-list; deletion scheduled
    Rejected,
    /// Unknown command name
    NotFound(String),
    /// Handler returned an error
    Failed(CommandError),
    /// Handler succeeded
    Completed,
}

/// Message dispatcher
pub struct MessageDispatcher {
    parser: MessageParser,
    commands: CommandService,
    config: Arc<ConfigService>,
    deletions: DeletionScheduler,
}

impl MessageDispatcher {
    pub fn new(config: Arc<ConfigService>, commands: CommandService, deletions: DeletionScheduler) -> Self {
        Self {
            parser: MessageParser::new(commands.prefix()),
            commands,
            config,
            deletions,
        }
    }

    pub fn prefix(&self) -> &str {
        self.parser.prefix()
    }

    /// Another actor removed a message; drop any pending delete for it
    pub fn message_deleted(&self, message_id: &str) {
        self.deletions.cancel(message_id);
    }

    pub fn pending_deletions(&self) -> usize {
        self.deletions.pending()
    }

    /// Process one incoming message
    pub async fn dispatch(&self, platform: Arc<dyn Platform>, message: Message) -> DispatchOutcome {
        let outcome = self.run(platform, &message).await;
        tracing::debug!(
            channel_id = %message.channel_id,
            message_id = %message.id,
            ?outcome,
            "Message dispatched"
        );
        outcome
    }

    async fn run(&self, platform: Arc<dyn Platform>, message: &Message) -> DispatchOutcome {
        // Received
        match platform.current_user_id().await {
            Ok(me) if me == message.author_id => return DispatchOutcome::Ignored,
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to resolve bot user: {}", e);
                return DispatchOutcome::Aborted;
            }
        }

        if !self.parser.is_command(&message.content) {
            return DispatchOutcome::Ignored;
        }

        let Some(guild_id) = message.guild_id.clone() else {
            tracing::debug!(author = %message.author_id, "Command outside a guild");
            return DispatchOutcome::Aborted;
        };

        let member = match platform.member(&guild_id, &message.author_id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::warn!(%guild_id, author = %message.author_id, "Failed to fetch member: {}", e);
                return DispatchOutcome::Aborted;
            }
        };

        // ChannelCheck
        if !self.config.is_bot_channel(&message.channel_id).await {
            react(platform.as_ref(), message, REACTION_DENIED).await;
            self.deletions.schedule(platform, message.channel_id.clone(), message.id.clone());
            return DispatchOutcome::Rejected;
        }

        // Parsed
        let Some(parsed) = self.parser.parse(&message.content) else {
            return DispatchOutcome::Ignored;
        };

        // Dispatched
        if self.commands.find(&parsed.name).is_none() {
            let err = CommandError::NotFound(parsed.name.clone());
            say(platform.as_ref(), message, &warning(&err)).await;
            react(platform.as_ref(), message, REACTION_DENIED).await;
            return DispatchOutcome::NotFound(parsed.name);
        }

        let ctx = CommandContext::new(parsed.params, Arc::clone(&platform), message.clone(), member, guild_id);

        match self.commands.handle(&parsed.name, &ctx).await {
            Ok(reply) => {
                if !reply.is_empty() {
                    say(platform.as_ref(), message, &reply).await;
                }
                react(platform.as_ref(), message, REACTION_OK).await;
                DispatchOutcome::Completed
            }
            Err(err) => {
                tracing::info!(command = %parsed.name, invoker = %ctx.member.user_id, "Command failed: {}", err);
                say(platform.as_ref(), message, &warning(&err)).await;
                react(platform.as_ref(), message, REACTION_DENIED).await;
                DispatchOutcome::Failed(err)
            }
        }
    }
}

/// Flag an error visually in the reply
fn warning(err: &CommandError) -> String {
    format!("⚠️ `{}`", err)
}

async fn say(platform: &dyn Platform, message: &Message, text: &str) {
    if let Err(e) = platform.send_message(&message.channel_id, text).await {
        tracing::warn!(channel_id = %message.channel_id, "Failed to send message: {}", e);
    }
}

async fn react(platform: &dyn Platform, message: &Message, emoji: &str) {
    if let Err(e) = platform.react(&message.channel_id, &message.id, emoji).await {
        tracing::warn!(channel_id = %message.channel_id, message_id = %message.id, "Failed to add reaction: {}", e);
    }
}
