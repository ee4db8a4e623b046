//! Local chat client for the hunt runtime.
//!
//! Stands in for the messenger transport: each stdin line is one chat message
//! from the configured player, and each reply is printed back.
//!
//! - [`config`]: environment configuration
//! - [`bootstrap`]: content loading and runtime assembly
//! - [`commands`]: chat command parsing
//! - [`chat`]: routing commands to the runtime
//! - [`render`]: reply text

pub mod bootstrap;
pub mod chat;
pub mod commands;
pub mod config;
pub mod render;

pub use bootstrap::build_runtime;
pub use chat::{ChatSession, Reply};
pub use commands::{Command, CommandError};
pub use config::ClientConfig;
