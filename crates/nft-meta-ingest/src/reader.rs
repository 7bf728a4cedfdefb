//! Lazy row reader over a semicolon-delimited attribute table.

use std::io::{BufRead, BufReader, Read};

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, trace};

use nft_meta_model::{Row, RowShape};

use crate::error::{IngestError, Result};
use crate::options::{DELIMITER, IngestOptions};

/// Single-pass iterator of [`Row`]s bound to the header of the table.
///
/// The first line is the header, split on every `;` with no quote handling.
/// Each subsequent record becomes a row whose values are bound positionally
/// to header names.
pub struct RowReader<R> {
    reader: csv::Reader<BufReader<R>>,
    headers: Vec<String>,
    record: StringRecord,
    row_shape: RowShape,
    line_offset: u64,
    finished: bool,
}

/// Start reading an attribute table from `source`.
///
/// The header line is parsed eagerly; data rows are parsed as the reader is
/// iterated. An empty source yields no header and no rows.
///
/// # Errors
///
/// Fails with [`IngestError::Decode`] if the header line is not valid UTF-8.
pub fn read_rows<R: Read>(source: R, options: &IngestOptions) -> Result<RowReader<R>> {
    let mut source = BufReader::new(source);
    let mut first_line = Vec::new();
    source
        .read_until(b'\n', &mut first_line)
        .map_err(|source| IngestError::Read { line: 1, source })?;
    let has_header = !first_line.is_empty();
    let headers = if has_header {
        split_header(&first_line)?
    } else {
        Vec::new()
    };
    debug!(columns = headers.len(), "read attribute table header");

    let reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    Ok(RowReader {
        reader,
        headers,
        record: StringRecord::new(),
        row_shape: options.row_shape,
        line_offset: u64::from(has_header),
        finished: !has_header,
    })
}

fn split_header(line: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(line).map_err(|_| IngestError::Decode { line: 1 })?;
    let text = text.trim_start_matches('\u{feff}').trim();
    Ok(text
        .split(char::from(DELIMITER))
        .map(str::to_string)
        .collect())
}

impl<R: Read> RowReader<R> {
    /// Column names in header order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn bind_record(&self) -> Result<Row> {
        let line = self.record.position().map_or(0, csv::Position::line) + self.line_offset;
        let expected = self.headers.len();
        let found = self.record.len();
        if found != expected {
            match self.row_shape {
                RowShape::Strict => {
                    return Err(IngestError::RaggedRow {
                        line,
                        expected,
                        found,
                    });
                }
                RowShape::Tolerant => {
                    debug!(line, expected, found, "ragged row tolerated");
                }
            }
        }

        let mut row = Row::with_capacity(expected);
        for (header, value) in self.headers.iter().zip(self.record.iter()) {
            row.insert(header.as_str(), value);
        }
        trace!(line, fields = row.len(), "bound row");
        Ok(row)
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                let row = self.bind_record();
                if row.is_err() {
                    self.finished = true;
                }
                Some(row)
            }
            Ok(false) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(IngestError::from(error).shift_line(self.line_offset)))
            }
        }
    }
}
