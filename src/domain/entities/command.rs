use std::collections::HashMap;

/// Which handler a command resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    ToggleRole,
    RegisterRole,
    ListRoles,
    Help,
}

/// Represents a bot command
#[derive(Debug, Clone)]
pub struct Command {
    pub name: String,
    pub kind: CommandKind,
    pub description: Option<String>,
    pub aliases: Vec<String>,
    pub usage: Option<String>,
    pub hidden: bool,
}

impl Command {
    pub fn new(name: impl Into<String>, kind: CommandKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            aliases: Vec::new(),
            usage: None,
            hidden: false,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Leave the command out of the help listing
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// All names this command answers to, primary name first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Command registry, built once at startup and read-only afterwards
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its name and every alias (all lower-cased).
    /// A later registration of the same name wins.
    pub fn register(&mut self, command: Command) {
        let slot = self.commands.len();
        for name in command.names() {
            self.index.insert(name.to_lowercase(), slot);
        }
        self.commands.push(command);
    }

    /// Case-insensitive lookup by name or alias
    pub fn find(&self, input: &str) -> Option<&Command> {
        self.index
            .get(&input.to_lowercase())
            .and_then(|&slot| self.commands.get(slot))
    }

    /// Commands in registration order
    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
