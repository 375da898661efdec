use serde::{Deserialize, Serialize};

/// The class of a transcript message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// A message the user submitted.
    User,

    /// An answer from the service.
    Bot,

    /// A locally generated notice, such as an error.
    System,
}

/// A single transcript message.
///
/// Messages are immutable once constructed; the transcript is append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// The message text.
    pub text: String,

    /// Who the message is from.
    pub sender: Sender,
}

impl Message {
    /// Create a new `Message` with the given text and sender.
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }

    /// Create a new user `Message`.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    /// Create a new bot `Message`.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    /// Create a new system `Message`.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(text, Sender::System)
    }
}
