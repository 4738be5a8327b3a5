use std::sync::Arc;

use crate::application::errors::{CommandError, ConfigError};
use crate::application::messaging::CommandContext;
use crate::application::services::ConfigService;
use crate::domain::rules::{find_role_by_id, find_role_by_name};

/// Reaction added to the command message when a handler refuses it
pub const REACTION_DENIED: &str = "❌";

/// Handler result: reply text (possibly empty) or a user-facing error
pub type HandlerResult = Result<String, CommandError>;

/// Role toggling, registration and listing
pub struct RoleService {
    config: Arc<ConfigService>,
}

impl RoleService {
    pub fn new(config: Arc<ConfigService>) -> Self {
        Self { config }
    }

    /// Toggle each named role on the invoker. Stops at the first failure;
    /// roles toggled before it stay toggled.
    pub async fn toggle_roles(&self, ctx: &CommandContext) -> HandlerResult {
        if ctx.params.is_empty() {
            return Ok(String::new());
        }

        let roles = ctx.platform.guild_roles(&ctx.guild_id).await?;
        let member = &ctx.member;

        for name in &ctx.params {
            let role = find_role_by_name(&roles, name).ok_or_else(|| CommandError::RoleNotFound {
                invoker: ctx.invoker(),
                role: name.clone(),
            })?;

            if !self.config.is_allowed_role(&role.id).await {
                return Err(CommandError::PermissionDenied { invoker: ctx.invoker() });
            }

            if member.has_role(&role.id) {
                ctx.platform.remove_role(&ctx.guild_id, &member.user_id, &role.id).await?;
                tracing::info!(user = %member.user_id, role = %role.name, "Role removed");
            } else {
                ctx.platform.add_role(&ctx.guild_id, &member.user_id, &role.id).await?;
                tracing::info!(user = %member.user_id, role = %role.name, "Role added");
            }
        }

        Ok(String::new())
    }

    /// Admin only: make role ids self-assignable. Every id is validated
    /// before any is appended.
    pub async fn register_roles(&self, ctx: &CommandContext) -> HandlerResult {
        if !self.config.is_admin(&ctx.member.roles).await {
            return Err(CommandError::PermissionDenied { invoker: ctx.invoker() });
        }

        let roles = ctx.platform.guild_roles(&ctx.guild_id).await?;

        for role_id in &ctx.params {
            if find_role_by_id(&roles, role_id).is_none() {
                self.deny(ctx).await;
                return Err(CommandError::RoleIdNotFound {
                    invoker: ctx.invoker(),
                    role_id: role_id.clone(),
                });
            }
            if self.config.is_admin_role(role_id).await {
                self.deny(ctx).await;
                return Err(CommandError::DangerousOperation { invoker: ctx.invoker() });
            }
        }

        match self.config.add_allowed_roles(&ctx.params).await {
            Ok(_) => Ok(String::new()),
            Err(ConfigError::AdminRoleNotAssignable(_)) => {
                self.deny(ctx).await;
                Err(CommandError::DangerousOperation { invoker: ctx.invoker() })
            }
            Err(e) => Err(CommandError::Platform(e.to_string())),
        }
    }

    /// Fenced block of the self-assignable role names, highest position first
    pub async fn list_roles(&self, ctx: &CommandContext) -> HandlerResult {
        let mut roles = ctx.platform.guild_roles(&ctx.guild_id).await?;
        roles.sort_by(|a, b| b.position.cmp(&a.position).then_with(|| a.id.cmp(&b.id)));

        let allowed = self.config.allowed_roles().await;
        let mut output = String::from("```\n");
        for role in roles.iter().filter(|r| allowed.contains(&r.id)) {
            output.push_str(&role.name);
            output.push('\n');
        }
        output.push_str("```");
        Ok(output)
    }

    async fn deny(&self, ctx: &CommandContext) {
        if let Err(e) = ctx
            .platform
            .react(&ctx.message.channel_id, &ctx.message.id, REACTION_DENIED)
            .await
        {
            tracing::warn!("Failed to add reaction: {}", e);
        }
    }
}
