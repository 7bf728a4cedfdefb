//! Error types for metadata output.

use std::path::PathBuf;

use nft_meta_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// A required column is absent from the source row.
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// The token id is not a plain file name.
    #[error("invalid token id '{token_id}': must be a plain file name")]
    InvalidTokenId { token_id: String },

    /// The record could not be serialized.
    #[error("failed to serialize metadata for token {token_id}: {source}")]
    Serialize {
        token_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The destination file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ModelError> for OutputError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::MissingField { field } => Self::MissingField { field },
            ModelError::InvalidTokenId { token_id } => Self::InvalidTokenId { token_id },
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
