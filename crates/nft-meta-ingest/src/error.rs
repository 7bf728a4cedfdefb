//! Error types for attribute table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the archive or its CSV entry.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Archive Errors ===
    /// Archive file could not be opened.
    #[error("failed to open archive {path}: {source}")]
    ArchiveOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a readable zip archive.
    #[error("invalid archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The attribute table entry does not exist in the archive.
    #[error("entry '{entry}' not found in archive {path}")]
    EntryNotFound { entry: String, path: PathBuf },

    /// The entry exists but could not be opened.
    #[error("failed to open entry '{entry}' in archive {path}: {source}")]
    EntryRead {
        entry: String,
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    // === CSV Errors ===
    /// A line is not valid UTF-8 text.
    #[error("line {line} is not valid UTF-8")]
    Decode { line: u64 },

    /// Reading the underlying stream failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    /// Any other CSV parser failure.
    #[error("failed to parse CSV at line {line}: {message}")]
    CsvParse { line: u64, message: String },

    /// Field count differs from the header (strict row shape only).
    #[error("line {line} has {found} fields, header has {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl IngestError {
    /// Whether the error concerns the archive container rather than its CSV content.
    pub fn is_archive_error(&self) -> bool {
        matches!(
            self,
            Self::ArchiveOpen { .. }
                | Self::Archive { .. }
                | Self::EntryNotFound { .. }
                | Self::EntryRead { .. }
        )
    }

    /// Move a CSV line number forward by `lines` already consumed before the parser.
    pub(crate) fn shift_line(mut self, lines: u64) -> Self {
        if let Self::Decode { line }
        | Self::Read { line, .. }
        | Self::CsvParse { line, .. }
        | Self::RaggedRow { line, .. } = &mut self
        {
            *line += lines;
        }
        self
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Utf8 { pos, .. } => Self::Decode {
                line: pos.as_ref().map_or(line, csv::Position::line),
            },
            csv::ErrorKind::Io(source) => Self::Read { line, source },
            _ => Self::CsvParse { line, message },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
