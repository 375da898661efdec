// Public modules
pub mod chat;
pub mod client;
pub mod client_logger;
pub mod controller;
pub mod error;
pub mod observability;
pub mod render;
pub mod session;
pub mod types;

// Re-exports
pub use client::{ChatEndpoint, RagClient};
pub use client_logger::{ClientLogger, StderrLogger};
pub use controller::{ChatController, ControllerStats, Turn};
pub use error::{Error, Result};
pub use render::{PlainTextRenderer, Renderer};
pub use session::Session;
pub use types::*;
