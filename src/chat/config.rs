//! Configuration types for the chat front-ends.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling the terminal chat.

use std::time::Duration;

use arrrg_derive::CommandLine;

/// Command-line arguments for the ragline terminal tools.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Base URL of the chat service.
    #[arrrg(optional, "Service URL (default: $RAGLINE_URL or http://127.0.0.1:8000/)", "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds.
    #[arrrg(optional, "Request timeout in seconds (default: 60)", "SECONDS")]
    pub timeout: Option<u64>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,

    /// Log every exchange to stderr.
    #[arrrg(flag, "Log every exchange to stderr")]
    pub verbose: bool,
}

/// Configuration for a terminal chat.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// The service URL; `None` defers to the client's env-var fallback.
    pub base_url: Option<String>,

    /// Request timeout; `None` defers to the client default.
    pub timeout: Option<Duration>,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Whether to log exchanges to stderr.
    pub verbose: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            use_color: true,
            verbose: false,
        }
    }

    /// Sets the service URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Enables exchange logging to stderr.
    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            base_url: args.url,
            timeout: args.timeout.map(Duration::from_secs),
            use_color: !args.no_color,
            verbose: args.verbose,
        }
    }
}
