//! Collection-level constants shared by every hidden (pre-reveal) record.

use serde::{Deserialize, Serialize};

use crate::record::MetadataRecord;

const DEFAULT_NAME: &str = "Buildix NFT Collection";
const DEFAULT_EXTERNAL_URL: &str = "https://buildix.xyz";
const DEFAULT_DESCRIPTION: &str = "Welcome 1st NFT drop from Buildix project! Buildix is a fractional real estate investment platform that makes real property investments affordable for everyone.

Diverse houses in NFT Collection symbolize different objects you will find available for investing on Buildix.

There are 5 grades of NFT. The golden are Unique ones — most valuable NFT that provide a long list of privilegies for its holder:
- Priority opportunity to invest in new objects on the platform
- Exclusive access to some non-public objects with limited shares and particularly high returns
- Low transactions fee
- Buildix token reward
- Access to the private investor community
- Secret bonus
- Guaranteed NFT redemption one year after your purchase if you decide to exit the project

See you soon on Buildix website: https://buildix.xyz/
";

/// Name, description and external url of the collection placeholder.
///
/// Missing fields in a deserialized document fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionInfo {
    pub name: String,
    pub description: String,
    pub external_url: String,
}

impl Default for CollectionInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            external_url: DEFAULT_EXTERNAL_URL.to_string(),
        }
    }
}

impl CollectionInfo {
    /// Placeholder record for a single token; `image` is the hidden image.
    pub fn hidden_record(&self, image: impl Into<String>) -> MetadataRecord {
        MetadataRecord {
            name: self.name.clone(),
            description: self.description.clone(),
            external_url: self.external_url.clone(),
            image: image.into(),
            attributes: Vec::new(),
        }
    }
}
