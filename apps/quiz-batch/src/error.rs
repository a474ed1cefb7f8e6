//! Error handling for the batch pipeline

use std::path::PathBuf;

use quiz_core::ParseError;
use thiserror::Error;

/// Batch error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for batch operations
pub type Result<T> = std::result::Result<T, AppError>;
