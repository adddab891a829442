// bed.rs

//! BED intervals and a lazy BED file reader.
//!
//! BED uses 0-based, half-open coordinates: `start` is included and `end`
//! is excluded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::RecordError;
use crate::io::{InputStream, LineRecord, Records};

/// Name given to regions from BED3 lines, which have no name column.
pub const MISSING_NAME: &str = ".";

/// An immutable genomic interval parsed from one BED line.
///
/// No relationship between `start` and `end` is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    chrom: String,
    start: i64,
    end: i64,
    name: String,
}

impl Region {
    pub fn new(chrom: impl Into<String>, start: i64, end: i64, name: impl Into<String>) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
            name: name.into(),
        }
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    /// Start position (0-based, inclusive).
    pub fn start(&self) -> i64 {
        self.start
    }

    /// End position (0-based, exclusive).
    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{} ({})", self.chrom, self.start, self.end, self.name)
    }
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<i64, RecordError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|source| RecordError::InvalidInteger {
            field,
            value: value.to_string(),
            source,
        })
}

impl LineRecord for Region {
    // UCSC track definition lines are matched on the bare prefix.
    fn is_skipped(line: &str) -> bool {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line.starts_with("track")
    }

    fn from_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() < 3 {
            return Err(RecordError::InsufficientFields {
                expected: 3,
                found: fields.len(),
            });
        }

        let start = parse_coordinate("start", fields[1])?;
        let end = parse_coordinate("end", fields[2])?;
        let name = fields.get(3).copied().unwrap_or(MISSING_NAME);

        Ok(Region::new(fields[0], start, end, name))
    }
}

/// Iterator over the regions of a BED file.
pub type BedRecords = Records<Region>;

/// A BED file, read lazily.
///
/// Constructing a reader never touches the filesystem. Each call to
/// [`BedReader::records`] (or each `into_iter()`) opens the file afresh.
#[derive(Debug, Clone)]
pub struct BedReader {
    input: InputStream,
}

impl BedReader {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            input: InputStream::new(filepath),
        }
    }

    pub fn path(&self) -> &Path {
        self.input.path()
    }

    pub fn records(&self) -> BedRecords {
        Records::new(self.input.clone())
    }
}

impl IntoIterator for BedReader {
    type Item = <BedRecords as Iterator>::Item;
    type IntoIter = BedRecords;

    fn into_iter(self) -> Self::IntoIter {
        Records::new(self.input)
    }
}

impl IntoIterator for &BedReader {
    type Item = <BedRecords as Iterator>::Item;
    type IntoIter = BedRecords;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}
