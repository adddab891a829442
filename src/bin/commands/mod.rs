// bin/commands/mod.rs

pub mod check;
pub mod stats;

use clap::{Args, ValueEnum};
use indicatif::style::TemplateError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use thiserror::Error;
use variant_core::VariantCoreError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] VariantCoreError),

    #[error("Cannot tell the format of {0}; pass --format bed or --format vcf")]
    UnknownFormat(PathBuf),

    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileFormat {
    Bed,
    Vcf,
}

impl FileFormat {
    fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "bed" => Some(FileFormat::Bed),
            "vcf" => Some(FileFormat::Vcf),
            _ => None,
        }
    }
}

/// The input file, shared by every subcommand.
#[derive(Args)]
pub struct InputArgs {
    /// Input BED or VCF file (uncompressed)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// File format. Inferred from the extension if not given
    #[arg(long, value_enum)]
    pub format: Option<FileFormat>,
}

impl InputArgs {
    pub fn format(&self) -> Result<FileFormat, CliError> {
        self.format
            .or_else(|| FileFormat::from_extension(&self.input))
            .ok_or_else(|| CliError::UnknownFormat(self.input.clone()))
    }
}

pub fn progress_spinner() -> Result<ProgressBar, CliError> {
    let pb = ProgressBar::new_spinner().with_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} records ({per_sec})")?,
    );
    Ok(pb)
}

/// Pull every record from `records`, calling `each` on it. Stops at the
/// first error. Returns the number of records seen.
pub fn drain<T, I>(
    records: I,
    pb: &ProgressBar,
    mut each: impl FnMut(&T),
) -> Result<u64, VariantCoreError>
where
    I: IntoIterator<Item = Result<T, VariantCoreError>>,
{
    let mut n = 0;
    for record in records {
        each(&record?);
        n += 1;
        pb.inc(1);
    }
    Ok(n)
}
