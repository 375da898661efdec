//! Command-line tool for one-shot questions against a RAG chat service.
//!
//! This binary sends each positional message in order over a single session
//! and prints the answers, without entering an interactive loop.
//!
//! # Usage
//!
//! ```bash
//! # Ask a single question
//! ragline-ask "What is in the corpus?"
//!
//! # Ask follow-ups on the same session
//! ragline-ask "Who wrote the report?" "When was it published?"
//!
//! # Structured output
//! ragline-ask --format json "What is in the corpus?"
//! ```

use std::sync::Arc;
use std::time::Duration;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use ragline::{ChatRequest, RagClient, Session, StderrLogger};

/// Output format for displaying answers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum OutputFormat {
    /// Plain text format (default) - human-readable output.
    #[default]
    Text,
    /// JSON format - structured output suitable for parsing.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid output format: {}. Valid options: text, json",
                s
            )),
        }
    }
}

/// Command-line arguments for the ragline-ask tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
struct Args {
    /// Base URL of the chat service.
    #[arrrg(optional, "Service URL (default: $RAGLINE_URL or http://127.0.0.1:8000/)", "URL")]
    url: Option<String>,

    /// Request timeout in seconds.
    #[arrrg(optional, "Request timeout in seconds (default: 60)", "SECONDS")]
    timeout: Option<u64>,

    /// Output format for answers (text, json).
    #[arrrg(optional, "Output format: text, json", "FORMAT")]
    format: Option<String>,

    /// Log every exchange to stderr.
    #[arrrg(flag, "Log every exchange to stderr")]
    verbose: bool,
}

/// Main entry point for the ragline-ask command-line tool.
///
/// Sends each positional message in order on one session and exits with
/// code 1 if any exchange failed.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, messages) = Args::from_command_line_relaxed("ragline-ask [OPTIONS] <MESSAGE>...");

    if messages.is_empty() {
        eprintln!("Error: Must specify at least one message");
        std::process::exit(1);
    }

    let output_format = if let Some(format_str) = args.format {
        format_str
            .parse()
            .map_err(|e| format!("Invalid format: {}", e))?
    } else {
        OutputFormat::Text
    };

    let mut client = RagClient::with_options(args.url, args.timeout.map(Duration::from_secs))?;
    if args.verbose {
        client = client.with_logger(Arc::new(StderrLogger));
    }

    let mut session = Session::new();
    let mut all_ok = true;

    for (i, message) in messages.iter().enumerate() {
        let mut request = ChatRequest::new(message.clone());
        if let Some(token) = session.token() {
            request = request.with_session_id(token);
        }

        match client.chat(&request).await {
            Ok(response) => {
                session.absorb(&response);
                match output_format {
                    OutputFormat::Text => {
                        if messages.len() > 1 {
                            println!("=== {} ===", message);
                        }
                        println!("{}", response.answer);
                        if messages.len() > 1 && i < messages.len() - 1 {
                            println!();
                        }
                    }
                    OutputFormat::Json => {
                        let json = serde_json::to_string_pretty(&serde_json::json!({
                            "message": message,
                            "answer": response.answer,
                            "session_id": session.token(),
                        }))?;
                        println!("{}", json);
                    }
                }
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                all_ok = false;
            }
        }
    }

    if !all_ok {
        std::process::exit(1);
    }

    Ok(())
}
