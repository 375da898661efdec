//! Session token state.
//!
//! The service correlates turns with an opaque token returned on the first
//! response. The token lives in an explicit [`Session`] value owned by the
//! calling context and passed to each submit, rather than in module-level
//! state.

use crate::types::ChatResponse;

/// The opaque session token carried across exchanges.
///
/// Starts empty, is set from the first response that supplies a token, and
/// is overwritten (last-write-wins) by any later response that supplies a
/// new one. There is no reset path; a fresh conversation is a fresh
/// `Session`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Creates a new session with no token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session resuming from a known token.
    pub fn resume(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Returns the current token, if one has been established.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns true once the server has supplied a token.
    pub fn is_established(&self) -> bool {
        self.token.is_some()
    }

    /// Absorbs the token from a response, if it carries one.
    pub fn absorb(&mut self, response: &ChatResponse) {
        if let Some(token) = &response.session_id {
            self.token = Some(token.clone());
        }
    }
}
