use serde::{Deserialize, Serialize};

/// The response body for a successful chat exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// The generated answer text.
    pub answer: String,

    /// The session token to carry on subsequent requests, if the server
    /// supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ChatResponse {
    /// Create a new `ChatResponse` with no session token.
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            session_id: None,
        }
    }

    /// Attach a session token to this response.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}
