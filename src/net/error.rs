//! Error taxonomy for the HTTP gateway.
//!
//! ERROR HANDLING
//! ==============
//! Three terminal classes: an expired session (always paired with the
//! logout-and-redirect side effect before the caller sees it), an
//! application-level rejection carrying the server's detail message, and a
//! transport or decode failure passed through unchanged. None of these are
//! retried; callers surface the message and move on.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a single gateway request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server rejected the stored credential. The credential has
    /// already been cleared and navigation to the login screen triggered.
    #[error("Session expired. Please log in again.")]
    SessionExpired,

    /// The request reached the server and was rejected for application
    /// reasons (validation, permissions, upstream failures).
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Server-supplied `detail` when present, else a generic message.
        message: String,
    },

    /// Network failure or a body that did not decode as expected.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// True when the failure means the session is gone and the current
    /// operation should abort without further handling.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}
