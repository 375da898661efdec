//! Wire and transcript types for the RAG chat service.

mod chat_request;
mod chat_response;
mod message;

pub use chat_request::ChatRequest;
pub use chat_response::ChatResponse;
pub use message::{Message, Sender};
