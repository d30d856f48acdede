//! GAF 2.2 row model and file reader.
//!
//! A GAF file is tab-separated with 17 columns per row and `!`-prefixed
//! comment/header lines. The reader yields one [`GafRow`] per data line;
//! rows with fewer columns are padded with empty strings — anything beyond
//! that is the transform's problem, not the reader's.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use gofer_common::Result;
use serde::{Deserialize, Serialize};

/// One GAF 2.2 annotation row, all columns as raw strings.
/// https://geneontology.org/docs/go-annotation-file-gaf-format-2.2/
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GafRow {
    pub db: String,
    pub db_object_id: String,
    pub db_object_symbol: String,
    pub qualifier: String,
    pub go_id: String,
    pub db_reference: String,
    pub evidence_code: String,
    pub with_or_from: String,
    pub aspect: String,
    pub db_object_name: String,
    pub db_object_synonym: String,
    pub db_object_type: String,
    pub taxon: String,
    pub date: String,
    pub assigned_by: String,
    pub annotation_extension: String,
    pub gene_product_form_id: String,
}

impl GafRow {
    /// Parse a single tab-separated GAF line.
    /// Missing trailing columns become empty strings. A trailing `\r`
    /// (CRLF input) is stripped so it cannot leak into the last column.
    pub fn from_line(line: &str) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut cols = line.split('\t');
        let mut next = || cols.next().unwrap_or("").to_string();
        GafRow {
            db: next(),
            db_object_id: next(),
            db_object_symbol: next(),
            qualifier: next(),
            go_id: next(),
            db_reference: next(),
            evidence_code: next(),
            with_or_from: next(),
            aspect: next(),
            db_object_name: next(),
            db_object_synonym: next(),
            db_object_type: next(),
            taxon: next(),
            date: next(),
            assigned_by: next(),
            annotation_extension: next(),
            gene_product_form_id: next(),
        }
    }
}

/// Streaming reader over a GAF file.
/// Skips `!` comment lines and blank lines.
pub struct GafReader<R: Read> {
    lines: Lines<BufReader<R>>,
}

impl GafReader<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(file))
    }
}

impl<R: Read> GafReader<R> {
    pub fn new(inner: R) -> Self {
        Self { lines: BufReader::new(inner).lines() }
    }
}

impl<R: Read> Iterator for GafReader<R> {
    type Item = Result<GafRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    let line = line.trim_end_matches('\r');
                    if line.is_empty() || line.starts_with('!') {
                        continue;
                    }
                    return Some(Ok(GafRow::from_line(line)));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
