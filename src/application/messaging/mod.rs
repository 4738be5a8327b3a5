//! Message handling - Event-driven message processing

pub mod context;
pub mod dispatcher;
pub mod parser;
pub mod scheduler;

pub use context::CommandContext;
pub use dispatcher::{DispatchOutcome, MessageDispatcher};
pub use parser::{MessageParser, ParsedCommand};
pub use scheduler::DeletionScheduler;
