//! Error types for gridbind-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridbind
///
/// These are programmer errors only. Malformed cell data never produces an
/// `Err`; the converters degrade to per-type defaults and schema problems
/// are reported as [`Message`](crate::Message) lists instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Column letters could not be decoded
    #[error("Invalid column letters: {0}")]
    InvalidColumnLetters(String),

    /// Column index exceeds what the letter codec supports
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// An entity schema declares a header more than once
    #[error("Duplicate schema header: {0}")]
    DuplicateSchemaHeader(String),

    /// A label did not match any variant of the target enum
    #[error("Unknown label '{0}' for {1}")]
    UnknownLabel(String, &'static str),

    /// Sheet model referenced by name but not declared
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
