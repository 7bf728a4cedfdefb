//! Data model for NFT collection metadata generation.
//!
//! Rows read from the attribute table are reshaped into [`MetadataRecord`]s,
//! one hidden (pre-reveal) and one public (post-reveal) record per token.

pub mod attribute;
pub mod collection;
pub mod error;
pub mod options;
pub mod record;
pub mod row;

pub use attribute::{ATTRIBUTE_PREFIX, ATTRIBUTE_SUFFIX, Attribute, extract_attributes, trait_name};
pub use collection::CollectionInfo;
pub use error::{ModelError, Result};
pub use options::{RowShape, TokenIdPolicy};
pub use record::MetadataRecord;
pub use row::{
    DESCRIPTION_KEY, EXTERNAL_URL_KEY, FILE_NAME_KEY, IMAGE_KEY, NAME_KEY, RESERVED_KEYS,
    Row, TOKEN_ID_KEY, is_reserved_key,
};
