//! Zip archive access for the collection attribute table.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;
use crate::reader::{RowReader, read_rows};

/// Location of the attribute table inside the collection archive.
pub const DEFAULT_ENTRY_NAME: &str = "ZIP/Buildix_attributes.csv";

/// An opened collection archive.
pub struct AttributeArchive {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl AttributeArchive {
    /// Open a zip archive for reading.
    ///
    /// # Errors
    ///
    /// [`IngestError::ArchiveOpen`] if the file cannot be opened,
    /// [`IngestError::Archive`] if it is not a valid zip archive.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| IngestError::ArchiveOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let archive = ZipArchive::new(file).map_err(|source| IngestError::Archive {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), entries = archive.len(), "opened archive");
        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    /// Names of all entries, in archive order.
    pub fn entry_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    pub fn contains_entry(&self, entry: &str) -> bool {
        self.archive.file_names().any(|name| name == entry)
    }

    /// Open the CSV entry `entry` (case-sensitive) and read its header.
    ///
    /// The returned reader borrows the archive and yields rows lazily.
    ///
    /// # Errors
    ///
    /// [`IngestError::EntryNotFound`] if the archive has no such entry.
    pub fn rows<'a>(
        &'a mut self,
        entry: &str,
        options: &IngestOptions,
    ) -> Result<RowReader<impl Read + use<'a>>> {
        if !self.contains_entry(entry) {
            debug!(entry, entries = ?self.entry_names(), "attribute table entry missing");
        }
        let file = match self.archive.by_name(entry) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => {
                return Err(IngestError::EntryNotFound {
                    entry: entry.to_string(),
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(IngestError::EntryRead {
                    entry: entry.to_string(),
                    path: self.path.clone(),
                    source,
                });
            }
        };
        info!(entry, size = file.size(), "reading attribute table");
        read_rows(file, options)
    }
}
