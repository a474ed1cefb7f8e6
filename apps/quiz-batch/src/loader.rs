//! Pick a reader by filename suffix and load records.

use std::fs;
use std::path::Path;

use quiz_core::{mytestx, ParseError, Record};
use tracing::{debug, warn};

use crate::error::{AppError, Result};

/// Input formats with a built-in reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    MyTestX,
}

impl Format {
    /// Detect the format from the file name suffix.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with("mytestx.txt") {
            Some(Self::MyTestX)
        } else {
            None
        }
    }

    pub fn parse(self, content: &str) -> std::result::Result<Vec<Record>, ParseError> {
        match self {
            Self::MyTestX => mytestx::parse(content),
        }
    }
}

/// Parse every supported file and concatenate the records.
///
/// Files with an unknown suffix are skipped.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let Some(format) = Format::from_path(path) else {
            warn!(path = %path.display(), "no reader for this file, skipping");
            continue;
        };
        let content = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = format.parse(&content).map_err(|source| AppError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), count = parsed.len(), "parsed");
        records.extend(parsed);
    }
    Ok(records)
}
