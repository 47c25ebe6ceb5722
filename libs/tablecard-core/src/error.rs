//! Error types for tablecard-core.

use thiserror::Error;

/// Result type alias using NoteError.
pub type Result<T> = std::result::Result<T, NoteError>;

/// Errors raised while turning one source note into flashcards.
///
/// Every variant is recoverable at the file level: callers log a warning,
/// drop the file from the output and keep processing the rest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("field '{field}' must be a {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("unknown parser '{0}'")]
    UnknownParser(String),

    #[error("unknown masker '{0}'")]
    UnknownMasker(String),

    #[error("'shuffle_rows' and 'shuffle_cols' cannot both be set")]
    ConflictingShuffleFlags,
}
