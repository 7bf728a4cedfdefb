//! Policies that resolve ambiguous input handling.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::row::{Row, TOKEN_ID_KEY};

/// How a row's token identifier is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenIdPolicy {
    /// Use the `tokenID` column when present and non-empty, else the row index.
    #[default]
    Auto,
    /// Require a non-empty `tokenID` column.
    Column,
    /// Zero-based position of the row among data lines.
    RowIndex,
}

impl TokenIdPolicy {
    /// Resolve the token identifier for the data row at `index`.
    ///
    /// # Errors
    ///
    /// [`TokenIdPolicy::Column`] fails with [`ModelError::MissingField`] when
    /// the row's `tokenID` column is absent or blank. A column value that is
    /// not a plain file name (`.`, `..`, or containing `/` or `\\`) fails
    /// with [`ModelError::InvalidTokenId`].
    pub fn resolve(self, row: &Row, index: usize) -> Result<String> {
        let column = row
            .get(TOKEN_ID_KEY)
            .map(str::trim)
            .filter(|value| !value.is_empty());
        match self {
            Self::Auto => column.map_or_else(|| Ok(index.to_string()), checked_token_id),
            Self::Column => column
                .ok_or_else(|| ModelError::missing_field(TOKEN_ID_KEY))
                .and_then(checked_token_id),
            Self::RowIndex => Ok(index.to_string()),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Column => "column",
            Self::RowIndex => "row-index",
        }
    }
}

fn checked_token_id(value: &str) -> Result<String> {
    if matches!(value, "." | "..") || value.contains(['/', '\\']) {
        return Err(ModelError::InvalidTokenId {
            token_id: value.to_string(),
        });
    }
    Ok(value.to_string())
}

impl std::fmt::Display for TokenIdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Handling of data lines whose field count differs from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowShape {
    /// Missing trailing columns are absent from the row; extra values are dropped.
    #[default]
    Tolerant,
    /// Any field count mismatch is an error.
    Strict,
}
