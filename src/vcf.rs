// vcf.rs

//! VCF variants and a lazy VCF file reader.
//!
//! Meta-information (`##`) and header (`#CHROM`) lines are skipped, not
//! interpreted. Sample columns are kept verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{RecordError, ValidationError};
use crate::io::{InputStream, LineRecord, Records};

/// Characters allowed in REF and ALT, after upper-casing. `,` separates
/// alternate alleles and `.` marks a missing allele.
const VALID_BASES: &[char] = &['G', 'T', 'C', 'A', 'N', '.', ','];

const MISSING_VALUE: &str = ".";

/// The raw, unvalidated fields of a variant.
///
/// Turn these into a [`Variant`] with [`Variant::try_new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantFields {
    pub chrom: String,
    pub pos: i64,
    pub id: String,
    #[serde(rename = "ref")]
    pub ref_: String,
    pub alt: String,
    pub qual: Option<f64>,
    pub filter: String,
    pub info: Vec<String>,
    pub format_fields: Vec<String>,
    pub samples: Vec<String>,
}

/// An immutable, validated genomic variant.
///
/// A `Variant` can only be obtained through [`Variant::try_new`] (or
/// deserialization, which goes through the same checks), so every value
/// satisfies:
///
///  - `qual`, when present, is not negative;
///  - `pos` is at least 1;
///  - REF and ALT only contain `A`, `C`, `G`, `T`, `N`, `.` and `,`
///    (case-insensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VariantFields", into = "VariantFields")]
pub struct Variant {
    chrom: String,
    pos: i64,
    id: String,
    ref_: String,
    alt: String,
    qual: Option<f64>,
    filter: String,
    info: Vec<String>,
    format_fields: Vec<String>,
    samples: Vec<String>,
}

impl Variant {
    pub fn try_new(fields: VariantFields) -> Result<Self, ValidationError> {
        if let Some(qual) = fields.qual {
            if qual < 0.0 {
                return Err(ValidationError::NegativeQuality(qual));
            }
        }

        if fields.pos < 1 {
            return Err(ValidationError::InvalidPosition(fields.pos));
        }

        validate_bases(&fields.ref_, &fields.alt)?;

        let VariantFields {
            chrom,
            pos,
            id,
            ref_,
            alt,
            qual,
            filter,
            info,
            format_fields,
            samples,
        } = fields;

        Ok(Self {
            chrom,
            pos,
            id,
            ref_,
            alt,
            qual,
            filter,
            info,
            format_fields,
            samples,
        })
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    /// Position (1-based).
    pub fn pos(&self) -> i64 {
        self.pos
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reference allele bases.
    pub fn ref_allele(&self) -> &str {
        &self.ref_
    }

    /// Alternate alleles, as written (comma-separated when multi-allelic).
    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Quality score, `None` when the QUAL column was `.`.
    pub fn qual(&self) -> Option<f64> {
        self.qual
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// INFO entries, split on `;`.
    pub fn info(&self) -> &[String] {
        &self.info
    }

    /// FORMAT keys, split on `:`. Empty when the FORMAT column is absent.
    pub fn format_fields(&self) -> &[String] {
        &self.format_fields
    }

    /// One raw string per sample column.
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// True when REF and ALT are each exactly one character.
    ///
    /// This looks at the raw ALT string, so it is only meaningful for
    /// bi-allelic sites.
    pub fn is_snp(&self) -> bool {
        self.ref_.chars().count() == 1 && self.alt.chars().count() == 1
    }

    pub fn is_multiallelic(&self) -> bool {
        self.alt.contains(',')
    }

    pub fn alt_alleles(&self) -> impl Iterator<Item = &str> {
        self.alt.split(',')
    }
}

fn validate_bases(ref_: &str, alt: &str) -> Result<(), ValidationError> {
    match ref_
        .chars()
        .chain(alt.chars())
        .find(|base| !VALID_BASES.contains(&base.to_ascii_uppercase()))
    {
        Some(base) => Err(ValidationError::InvalidBase {
            base: base.to_ascii_uppercase(),
        }),
        None => Ok(()),
    }
}

impl TryFrom<VariantFields> for Variant {
    type Error = ValidationError;

    fn try_from(fields: VariantFields) -> Result<Self, Self::Error> {
        Variant::try_new(fields)
    }
}

impl From<Variant> for VariantFields {
    fn from(variant: Variant) -> Self {
        VariantFields {
            chrom: variant.chrom,
            pos: variant.pos,
            id: variant.id,
            ref_: variant.ref_,
            alt: variant.alt,
            qual: variant.qual,
            filter: variant.filter,
            info: variant.info,
            format_fields: variant.format_fields,
            samples: variant.samples,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}>{}", self.chrom, self.pos, self.ref_, self.alt)
    }
}

impl LineRecord for Variant {
    fn is_skipped(line: &str) -> bool {
        line.starts_with('#') || line.trim().is_empty()
    }

    fn from_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() < 8 {
            return Err(RecordError::InsufficientColumns {
                expected: 8,
                found: fields.len(),
            });
        }

        let pos = fields[1]
            .trim()
            .parse::<i64>()
            .map_err(|source| RecordError::InvalidInteger {
                field: "pos",
                value: fields[1].to_string(),
                source,
            })?;

        let qual = match fields[5] {
            MISSING_VALUE => None,
            value => Some(value.trim().parse::<f64>().map_err(|source| {
                RecordError::InvalidFloat {
                    field: "qual",
                    value: value.to_string(),
                    source,
                }
            })?),
        };

        let format_fields = match fields.get(8) {
            Some(format) => format.split(':').map(String::from).collect(),
            None => Vec::new(),
        };

        let variant = Variant::try_new(VariantFields {
            chrom: fields[0].to_string(),
            pos,
            id: fields[2].to_string(),
            ref_: fields[3].to_string(),
            alt: fields[4].to_string(),
            qual,
            filter: fields[6].to_string(),
            info: fields[7].split(';').map(String::from).collect(),
            format_fields,
            samples: fields.iter().skip(9).map(|s| s.to_string()).collect(),
        })?;

        Ok(variant)
    }
}

/// Iterator over the variants of a VCF file.
pub type VcfRecords = Records<Variant>;

/// A VCF file, read lazily.
///
/// Constructing a reader never touches the filesystem. Each call to
/// [`VcfReader::records`] (or each `into_iter()`) opens the file afresh.
#[derive(Debug, Clone)]
pub struct VcfReader {
    input: InputStream,
}

impl VcfReader {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            input: InputStream::new(filepath),
        }
    }

    pub fn path(&self) -> &Path {
        self.input.path()
    }

    pub fn records(&self) -> VcfRecords {
        Records::new(self.input.clone())
    }
}

impl IntoIterator for VcfReader {
    type Item = <VcfRecords as Iterator>::Item;
    type IntoIter = VcfRecords;

    fn into_iter(self) -> Self::IntoIter {
        Records::new(self.input)
    }
}

impl IntoIterator for &VcfReader {
    type Item = <VcfRecords as Iterator>::Item;
    type IntoIter = VcfRecords;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}
