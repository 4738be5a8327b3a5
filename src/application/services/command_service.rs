use std::sync::Arc;

use crate::application::errors::CommandError;
use crate::application::messaging::CommandContext;
use crate::application::services::{ConfigService, HandlerResult, RoleService};
use crate::domain::entities::{Command, CommandKind, CommandRegistry};

/// Width of the usage column in the help listing
const USAGE_WIDTH: usize = 38;

/// Service for looking up and executing commands
pub struct CommandService {
    registry: CommandRegistry,
    roles: RoleService,
    prefix: String,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>, config: Arc<ConfigService>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            roles: RoleService::new(config),
            prefix: prefix.into(),
        }
    }

    /// Service with the standard role commands registered
    pub fn with_defaults(prefix: impl Into<String>, config: Arc<ConfigService>) -> Self {
        let mut service = Self::new(prefix, config);
        service.register_defaults();
        service
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    pub fn register_defaults(&mut self) {
        self.register(Command::new("role", CommandKind::ToggleRole)
            .with_aliases(vec!["pronoun".to_string(), "neuro".to_string()])
            .with_usage("name (name...)")
            .with_description("Set cosmetic roles for pronouns and neurodiverse traits."));

        self.register(Command::new("addrole", CommandKind::RegisterRole)
            .with_usage("id (id...)")
            .with_description("Make roles self-assignable (admins only).")
            .hidden());

        self.register(Command::new("listroles", CommandKind::ListRoles)
            .with_description("List the available roles"));

        self.register(Command::new("help", CommandKind::Help)
            .with_description("Show this message")
            .hidden());
    }

    /// Case-insensitive lookup
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.registry.find(name)
    }

    pub async fn handle(&self, name: &str, ctx: &CommandContext) -> HandlerResult {
        let cmd = self.find(name)
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

        tracing::debug!(command = %cmd.name, params = ?ctx.params, "Executing command");

        match cmd.kind {
            CommandKind::ToggleRole => self.roles.toggle_roles(ctx).await,
            CommandKind::RegisterRole => self.roles.register_roles(ctx).await,
            CommandKind::ListRoles => self.roles.list_roles(ctx).await,
            CommandKind::Help => Ok(self.get_help()),
        }
    }

    /// Usage listing of every visible command, in a fenced block
    pub fn get_help(&self) -> String {
        let mut help = String::from("```\n");
        for cmd in self.registry.all().filter(|c| !c.hidden) {
            let names = cmd.names().collect::<Vec<_>>().join("/");
            let usage = match &cmd.usage {
                Some(args) => format!("{}{} {}", self.prefix, names, args),
                None => format!("{}{}", self.prefix, names),
            };
            help.push_str(&format!(
                "{:<width$} - {}\n",
                usage,
                cmd.description.as_deref().unwrap_or(""),
                width = USAGE_WIDTH,
            ));
        }
        help.push_str("```");
        help
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
