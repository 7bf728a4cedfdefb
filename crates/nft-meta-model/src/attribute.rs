//! Trait columns (`attributes[<trait>]`) and their extraction from a row.

use serde::{Deserialize, Serialize};

use crate::row::Row;

pub const ATTRIBUTE_PREFIX: &str = "attributes[";
pub const ATTRIBUTE_SUFFIX: &str = "]";

/// A single `trait_type`/`value` pair in the metadata output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// Return the trait name if `key` is a trait column.
///
/// The prefix is required; the closing bracket is stripped when present, so a
/// bare `attributes[` yields an empty trait name rather than being rejected.
pub fn trait_name(key: &str) -> Option<&str> {
    let inner = key.strip_prefix(ATTRIBUTE_PREFIX)?;
    Some(inner.strip_suffix(ATTRIBUTE_SUFFIX).unwrap_or(inner))
}

/// Collect every trait column of `row`, in column order.
pub fn extract_attributes(row: &Row) -> Vec<Attribute> {
    row.iter()
        .filter_map(|(key, value)| trait_name(key).map(|name| Attribute::new(name, value)))
        .collect()
}
