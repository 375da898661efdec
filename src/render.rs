//! Output rendering for the chat front-ends.
//!
//! This module provides a trait-based rendering abstraction so the
//! controller can append structured messages to a transcript without
//! knowing how they are presented. The default implementation writes to
//! stdout with optional ANSI styling.

use std::io::{self, Stdout, Write};

use crate::types::{Message, Sender};

/// ANSI escape code for cyan text (used for the user label).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for green text (used for the bot label).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for red text (used for system messages).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for dim text (used for the typing indicator).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code to erase the current line.
const ANSI_ERASE_LINE: &str = "\r\x1b[2K";

/// Trait for rendering chat output.
///
/// The controller calls these hooks in a fixed order per exchange: the user
/// message, then the typing indicator, then exactly one bot or system
/// message once the exchange resolves. Implementations decide presentation;
/// `clear_typing` must be a no-op when no indicator is showing.
pub trait Renderer: Send {
    /// Append a transcript message, dispatching on its sender.
    fn append(&mut self, message: &Message) {
        match message.sender {
            Sender::User => self.print_user(&message.text),
            Sender::Bot => self.print_bot(&message.text),
            Sender::System => self.print_system(&message.text),
        }
    }

    /// Append a user message to the transcript.
    fn print_user(&mut self, text: &str);

    /// Append a bot answer to the transcript.
    fn print_bot(&mut self, text: &str);

    /// Append a system message (errors and local notices) to the transcript.
    fn print_system(&mut self, text: &str);

    /// Print an informational line outside the transcript proper.
    fn print_info(&mut self, info: &str);

    /// Show the typing indicator for a pending exchange.
    fn show_typing(&mut self);

    /// Remove the typing indicator. Idempotent.
    fn clear_typing(&mut self);
}

/// Plain text renderer with optional ANSI styling.
///
/// Writes the transcript to stdout. When styling is enabled the typing
/// indicator is erased in place once the response arrives; without styling
/// it is left on its own line.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
    echo_user: bool,
    typing_shown: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI styling enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer with the specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
            echo_user: true,
            typing_shown: false,
        }
    }

    /// Suppress echoing of user messages.
    ///
    /// Line-editor front-ends already display the submitted line at the
    /// prompt, so re-printing it would duplicate the transcript entry.
    pub fn without_user_echo(mut self) -> Self {
        self.echo_user = false;
        self
    }

    /// Flushes stdout to ensure immediate display.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_user(&mut self, text: &str) {
        self.clear_typing();
        if !self.echo_user {
            return;
        }
        if self.use_color {
            println!("{ANSI_CYAN}You:{ANSI_RESET} {text}");
        } else {
            println!("You: {text}");
        }
        self.flush();
    }

    fn print_bot(&mut self, text: &str) {
        self.clear_typing();
        if self.use_color {
            println!("{ANSI_GREEN}Bot:{ANSI_RESET} {text}");
        } else {
            println!("Bot: {text}");
        }
        self.flush();
    }

    fn print_system(&mut self, text: &str) {
        self.clear_typing();
        if self.use_color {
            println!("{ANSI_RED}{text}{ANSI_RESET}");
        } else {
            println!("{text}");
        }
        self.flush();
    }

    fn print_info(&mut self, info: &str) {
        self.clear_typing();
        println!("{info}");
        self.flush();
    }

    fn show_typing(&mut self) {
        if self.typing_shown {
            return;
        }
        self.typing_shown = true;
        if self.use_color {
            print!("{ANSI_DIM}...{ANSI_RESET}");
        } else {
            print!("...");
        }
        self.flush();
    }

    fn clear_typing(&mut self) {
        if !self.typing_shown {
            return;
        }
        self.typing_shown = false;
        if self.use_color {
            print!("{ANSI_ERASE_LINE}");
        } else {
            println!();
        }
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_default_has_color() {
        let renderer = PlainTextRenderer::new();
        assert!(renderer.use_color);
        assert!(renderer.echo_user);
    }

    #[test]
    fn renderer_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert!(!renderer.use_color);
    }

    #[test]
    fn renderer_without_user_echo() {
        let renderer = PlainTextRenderer::new().without_user_echo();
        assert!(!renderer.echo_user);
    }

    #[test]
    fn clear_typing_idempotent() {
        let mut renderer = PlainTextRenderer::with_color(false);
        renderer.clear_typing();
        renderer.show_typing();
        renderer.clear_typing();
        renderer.clear_typing();
        assert!(!renderer.typing_shown);
    }
}
