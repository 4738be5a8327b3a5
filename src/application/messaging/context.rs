//! Per-message command context

use std::sync::Arc;
use crate::domain::entities::{Member, Message};
use crate::domain::traits::Platform;

/// Context handed to a command handler, built fresh for every dispatch
#[derive(Clone)]
pub struct CommandContext {
    pub params: Vec<String>,
    pub platform: Arc<dyn Platform>,
    pub message: Message,
    pub member: Member,
    pub guild_id: String,
}

impl CommandContext {
    pub fn new(
        params: Vec<String>,
        platform: Arc<dyn Platform>,
        message: Message,
        member: Member,
        guild_id: impl Into<String>,
    ) -> Self {
        Self {
            params,
            platform,
            message,
            member,
            guild_id: guild_id.into(),
        }
    }

    /// Name the invoker is addressed by in replies
    pub fn invoker(&self) -> String {
        self.member.display_name().to_string()
    }
}
