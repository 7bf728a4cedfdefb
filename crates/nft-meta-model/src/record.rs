use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// Token metadata document as written to `<token_id>.json`.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub name: String,
    pub description: String,
    pub external_url: String,
    pub image: String,
    pub attributes: Vec<Attribute>,
}
