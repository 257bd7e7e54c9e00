//! Error types

use std::path::PathBuf;

/// Failure while encoding a CSV export or writing it to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to write export to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors surfaced while a table handles an event.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error(transparent)]
    Export(#[from] ExportError),
}
