use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A required column is absent from the row.
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// A token id that cannot name a file inside the output directory.
    #[error("invalid token id '{token_id}': must be a plain file name")]
    InvalidTokenId { token_id: String },
}

impl ModelError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
