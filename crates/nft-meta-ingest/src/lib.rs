//! Attribute table ingestion.
//!
//! Opens the collection archive, locates the attribute CSV inside it and
//! yields one [`Row`](nft_meta_model::Row) per data line, lazily and in file
//! order.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use nft_meta_ingest::{AttributeArchive, DEFAULT_ENTRY_NAME, IngestOptions};
//!
//! let mut archive = AttributeArchive::open(Path::new("collection.zip"))?;
//! for row in archive.rows(DEFAULT_ENTRY_NAME, &IngestOptions::default())? {
//!     let row = row?;
//!     println!("{:?}", row.get("name"));
//! }
//! ```

mod archive;
mod error;
mod options;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Archive Access ===
pub use archive::{AttributeArchive, DEFAULT_ENTRY_NAME};

// === CSV Reading ===
pub use options::{DELIMITER, IngestOptions};
pub use reader::{RowReader, read_rows};
