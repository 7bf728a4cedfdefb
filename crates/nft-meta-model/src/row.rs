//! Ordered column-name to value mapping for one CSV line.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

pub const NAME_KEY: &str = "name";
pub const DESCRIPTION_KEY: &str = "description";
pub const EXTERNAL_URL_KEY: &str = "external_url";
pub const IMAGE_KEY: &str = "image";
pub const FILE_NAME_KEY: &str = "file_name";
pub const TOKEN_ID_KEY: &str = "tokenID";

/// Columns with a fixed meaning. Everything else is either an
/// `attributes[...]` trait column or ignored.
pub const RESERVED_KEYS: [&str; 6] = [
    NAME_KEY,
    DESCRIPTION_KEY,
    EXTERNAL_URL_KEY,
    IMAGE_KEY,
    FILE_NAME_KEY,
    TOKEN_ID_KEY,
];

pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// One data line of the attribute table, keyed by header name.
///
/// Iteration follows insertion order, which is the header order when the
/// row comes from the loader. Inserting a key twice replaces the value in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace a column value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Look up a column that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`] when the row has no such column.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| ModelError::missing_field(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}
