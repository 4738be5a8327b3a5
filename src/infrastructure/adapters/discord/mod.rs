//! Discord adapter built on serenity

mod handler;
mod platform;

pub use handler::DiscordHandler;
pub use platform::SerenityPlatform;
