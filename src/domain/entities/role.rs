/// A guild role, read-only from the bot's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub position: u16,
}

impl Role {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: 0,
        }
    }

    pub fn with_position(mut self, position: u16) -> Self {
        self.position = position;
        self
    }
}
