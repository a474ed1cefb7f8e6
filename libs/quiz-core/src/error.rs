//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while building a single record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("question '{question}' has {flags} correctness flags but only {variants} variants")]
    InsufficientChoices {
        question: String,
        variants: usize,
        flags: usize,
    },
}

/// Errors that can occur while reading MyTestX text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("answer without question at line {line}")]
    OrphanAnswer { line: usize },

    #[error("image without question at line {line}")]
    OrphanImage { line: usize },
}
