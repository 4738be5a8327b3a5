//! Domain entities - Core business objects with no external dependencies

pub mod member;
pub mod role;
pub mod message;
pub mod command;

pub use member::Member;
pub use role::Role;
pub use message::Message;
pub use command::{Command, CommandKind, CommandRegistry};
