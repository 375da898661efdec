//! Interactive terminal chat for a RAG chat service.
//!
//! This binary provides a REPL that submits each line to the service and
//! prints the answer, carrying the session token across turns.
//!
//! # Usage
//!
//! ```bash
//! # Talk to the default service (or $RAGLINE_URL)
//! ragline-chat
//!
//! # Point at a specific service
//! ragline-chat --url http://rag.example.com:8000/
//!
//! # Disable colors (useful for piping output)
//! ragline-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/session` - Show the current session token
//! - `/stats` - Show chat statistics
//! - `/quit` - Exit the chat

use std::sync::Arc;

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use ragline::chat::{ChatArgs, ChatCommand, ChatConfig, help_text, parse_command};
use ragline::{
    ChatController, ControllerStats, PlainTextRenderer, RagClient, Renderer, Session, StderrLogger,
};

/// Main entry point for the ragline-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("ragline-chat [OPTIONS]");
    let config = ChatConfig::from(args);

    let mut client = RagClient::with_options(config.base_url.clone(), config.timeout)?;
    if config.verbose {
        client = client.with_logger(Arc::new(StderrLogger));
    }
    let base_url = client.base_url().to_string();

    let mut controller = ChatController::new(client);
    let mut session = Session::new();
    let mut renderer = PlainTextRenderer::with_color(config.use_color).without_user_echo();
    let mut rl = DefaultEditor::new()?;

    println!("RAG Chat ({})", base_url);
    println!("Type /help for commands, /quit to exit\n");

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Session => match session.token() {
                            Some(token) => renderer.print_info(&format!("Session: {}", token)),
                            None => renderer.print_info("Session: (not established)"),
                        },
                        ChatCommand::Stats => {
                            print_stats(controller.stats(), &session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_system(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to the service
                controller.submit(line, &mut session, &mut renderer).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_system(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn print_stats(stats: ControllerStats, session: &Session) {
    println!("    Chat Statistics:");
    println!("      Submissions: {}", stats.submissions);
    println!("      Answered: {}", stats.answered);
    println!("      Server errors: {}", stats.server_errors);
    println!("      Transport errors: {}", stats.transport_errors);
    match session.token() {
        Some(token) => println!("      Session: {}", token),
        None => println!("      Session: (not established)"),
    }
}
