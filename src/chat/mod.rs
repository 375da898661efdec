//! Terminal chat support for the ragline front-ends.
//!
//! This module provides the pieces the REPL binary composes around the
//! controller:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`commands`]: slash command parsing and handling

mod commands;
mod config;

pub use crate::controller::{ChatController, ControllerStats, Turn};
pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
