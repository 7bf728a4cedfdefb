//! Metadata record building and JSON file output.
//!
//! [`build_record`] reshapes an attribute row into a public
//! [`MetadataRecord`](nft_meta_model::MetadataRecord);
//! [`write_record`] writes a record to `<output_dir>/<token_id>.json`.

mod error;
mod record;
mod writer;

pub use error::{OutputError, Result};
pub use record::{build_hidden_record, build_record, public_image_ref};
pub use writer::{metadata_path, render_record, write_record};
