//! Streaming, validating readers for BED and VCF files.
//!
//! Both readers are lazy: a [`BedReader`] or [`VcfReader`] only stores a
//! path, and the file is opened when iteration starts. Iteration yields
//! `Result<Region, _>` / `Result<Variant, _>` one line at a time and stops
//! at the first malformed line.
//!
//! ```no_run
//! use variant_core::VcfReader;
//!
//! # fn main() -> Result<(), variant_core::VariantCoreError> {
//! for variant in VcfReader::new("calls.vcf") {
//!     let variant = variant?;
//!     if variant.is_snp() {
//!         println!("{}", variant);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod bed;
pub mod error;
pub mod io;
pub mod stats;
pub mod vcf;

pub use bed::{BedReader, BedRecords, Region};
pub use error::{RecordError, ValidationError, VariantCoreError};
pub use io::{InputStream, LineRecord, Records};
pub use stats::{BedStats, VcfStats};
pub use vcf::{Variant, VariantFields, VcfReader, VcfRecords};

#[cfg(test)]
pub(crate) mod test_utils;
