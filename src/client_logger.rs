//! Logging trait for chat client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows users to
//! capture and log all exchanges passing through the [`RagClient`].
//!
//! [`RagClient`]: crate::RagClient

use crate::error::Error;
use crate::types::{ChatRequest, ChatResponse};

/// A trait for logging chat client operations.
///
/// Implement this trait to capture and record all exchanges, including
/// requests, successful responses, and failures. Failures surfaced to the
/// user as a generic message still reach the logger with full detail.
///
/// # Example
///
/// ```rust,ignore
/// use ragline::{ChatRequest, ChatResponse, ClientLogger, Error};
/// use std::io::Write;
/// use std::sync::Mutex;
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_request(&self, request: &ChatRequest) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Request: {}", serde_json::to_string(request).unwrap()).unwrap();
///     }
///
///     fn log_response(&self, response: &ChatResponse) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Response: {}", serde_json::to_string(response).unwrap()).unwrap();
///     }
///
///     fn log_error(&self, error: &Error) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Error: {}", error).unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log an outgoing request.
    ///
    /// Called once per `chat` call, before the request is sent.
    fn log_request(&self, request: &ChatRequest);

    /// Log a successful response.
    ///
    /// Called once per successful `chat` call with the parsed
    /// [`ChatResponse`].
    fn log_response(&self, response: &ChatResponse);

    /// Log a failed exchange.
    ///
    /// Called once per failed `chat` call with the full [`Error`], whether
    /// the failure was reported by the server or the transport.
    fn log_error(&self, error: &Error);
}

/// A [`ClientLogger`] that writes one line per event to stderr.
///
/// Useful as a diagnostics sink for the terminal front-ends, where transport
/// faults are shown to the user only as a generic message.
#[derive(Debug, Default)]
pub struct StderrLogger;

impl ClientLogger for StderrLogger {
    fn log_request(&self, request: &ChatRequest) {
        if let Ok(json) = serde_json::to_string(request) {
            eprintln!("ragline: request: {json}");
        }
    }

    fn log_response(&self, response: &ChatResponse) {
        if let Ok(json) = serde_json::to_string(response) {
            eprintln!("ragline: response: {json}");
        }
    }

    fn log_error(&self, error: &Error) {
        eprintln!("ragline: error: {error}");
    }
}
