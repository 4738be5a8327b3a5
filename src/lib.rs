//! Role self-service bot
//!
//! Listens for prefixed commands in designated channels and toggles
//! self-assignable cosmetic roles on the invoking member.

pub mod domain;
pub mod application;
pub mod infrastructure;
