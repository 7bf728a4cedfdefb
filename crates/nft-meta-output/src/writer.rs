//! JSON file output for metadata records.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use nft_meta_model::MetadataRecord;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::{Formatter, PrettyFormatter};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Destination of a token's metadata: `<output_dir>/<token_id>.json`.
pub fn metadata_path(output_dir: &Path, token_id: &str) -> PathBuf {
    output_dir.join(format!("{token_id}.json"))
}

/// Serialize a record as 2-space indented JSON without a trailing newline.
///
/// The output is pure ASCII: every non-ASCII character in a string is written
/// as a `\uXXXX` escape, with a surrogate pair above U+FFFF.
pub fn render_record(token_id: &str, record: &MetadataRecord) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(256);
    let mut serializer = Serializer::with_formatter(&mut buf, AsciiFormatter::default());
    record
        .serialize(&mut serializer)
        .map_err(|source| OutputError::Serialize {
            token_id: token_id.to_string(),
            source,
        })?;
    Ok(buf)
}

/// [`PrettyFormatter`] that escapes non-ASCII string content.
#[derive(Default)]
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl Formatter for AsciiFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..index])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }
}

/// Write `record` to `<output_dir>/<token_id>.json`, replacing any existing file.
///
/// The document is rendered before the file is touched, so a serialization
/// failure leaves the destination unchanged. `output_dir` must already exist.
///
/// # Errors
///
/// [`OutputError::Write`] if the file cannot be created or written.
pub fn write_record(output_dir: &Path, token_id: &str, record: &MetadataRecord) -> Result<PathBuf> {
    let path = metadata_path(output_dir, token_id);
    let contents = render_record(token_id, record)?;
    let write_err = |source| OutputError::Write {
        path: path.clone(),
        source,
    };
    let mut file = File::create(&path).map_err(write_err)?;
    file.write_all(&contents).map_err(write_err)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote metadata");
    Ok(path)
}
