use nft_meta_model::{
    CollectionInfo, DESCRIPTION_KEY, EXTERNAL_URL_KEY, FILE_NAME_KEY, MetadataRecord, NAME_KEY,
    Row, extract_attributes,
};

use crate::error::Result;

/// Build the public record for `row`, using `image_ref` verbatim as the image.
///
/// # Errors
///
/// [`OutputError::MissingField`](crate::OutputError::MissingField) if the row
/// lacks `name`, `description` or `external_url`.
pub fn build_record(image_ref: &str, row: &Row) -> Result<MetadataRecord> {
    Ok(MetadataRecord {
        name: row.require(NAME_KEY)?.to_string(),
        description: row.require(DESCRIPTION_KEY)?.to_string(),
        external_url: row.require(EXTERNAL_URL_KEY)?.to_string(),
        image: image_ref.to_string(),
        attributes: extract_attributes(row),
    })
}

/// Placeholder record shared by every token before reveal.
pub fn build_hidden_record(collection: &CollectionInfo, image_ref: &str) -> MetadataRecord {
    collection.hidden_record(image_ref)
}

/// Public image location: `<prefix>/<file_name>`.
///
/// An empty `file_name` is not rejected and yields `<prefix>/`.
pub fn public_image_ref(prefix: &str, row: &Row) -> Result<String> {
    let file_name = row.require(FILE_NAME_KEY)?;
    Ok(format!("{prefix}/{file_name}"))
}
