//! Message parser - Splits prefixed command text into a command token and params

/// Parses incoming command text for a fixed prefix
#[derive(Debug, Clone)]
pub struct MessageParser {
    command_prefix: String,
}

/// A command token and its arguments, as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub params: Vec<String>,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.command_prefix
    }

    pub fn is_command(&self, text: &str) -> bool {
        text.starts_with(&self.command_prefix)
    }

    /// Parse a prefixed message; `None` for ordinary chat traffic
    pub fn parse(&self, text: &str) -> Option<ParsedCommand> {
        let name = extract_command(text, &self.command_prefix)?;
        let params = extract_params(text, name, &self.command_prefix);
        Some(ParsedCommand {
            name: name.to_string(),
            params,
        })
    }
}

/// First whitespace-delimited token with the prefix stripped
pub fn extract_command<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(prefix)?;
    rest.split(char::is_whitespace).next()
}

/// Everything after the command token and one separator, split on single spaces.
/// Empty tokens from repeated or trailing spaces are dropped.
pub fn extract_params(text: &str, command: &str, prefix: &str) -> Vec<String> {
    let Some(remainder) = text
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(command))
    else {
        return Vec::new();
    };

    // skip exactly one separator character
    let mut chars = remainder.chars();
    if chars.next().is_none() {
        return Vec::new();
    }

    chars
        .as_str()
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
