//! Error types for emoterm.
//!
//! This module defines the centralized error type [`EmotermError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for emoterm operations.
///
/// Each variant maps to one failure class of the search → pick → copy flow.
/// The entry point decides which of them are fatal and how they are reported;
/// every variant renders as a short, user-facing message.
///
/// # Examples
///
/// ```
/// use emoterm::EmotermError;
///
/// let err = EmotermError::Network("connection refused".to_string());
/// assert_eq!(err.to_string(), "Network error: connection refused");
/// ```
#[derive(Debug, Error)]
pub enum EmotermError {
    /// The command line did not contain a search query.
    #[error("{0}")]
    Usage(String),

    /// Fetching or reading the search results page failed.
    ///
    /// Covers connectivity failures, non-2xx responses and unreadable bodies.
    #[error("Network error: {0}")]
    Network(String),

    /// Writing to the system clipboard failed.
    ///
    /// Raised by both the native clipboard and the external helper command,
    /// including a helper that exits with a non-zero status.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Terminal setup, rendering or input failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// A display line could not be parsed back into an entry.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Theme lookup or parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for emoterm operations.
pub type Result<T> = std::result::Result<T, EmotermError>;
