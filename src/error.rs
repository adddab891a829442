// error.rs

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// A [`crate::Variant`] invariant that does not hold.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Quality must not be negative, got {0}")]
    NegativeQuality(f64),

    #[error("Position must be >= 1, got {0}")]
    InvalidPosition(i64),

    #[error("Invalid base '{base}' in ref/alt")]
    InvalidBase { base: char },
}

/// Why a single data line could not be turned into a record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("invalid record: expected at least {expected} fields, found {found}")]
    InsufficientFields { expected: usize, found: usize },

    #[error("insufficient columns: expected at least {expected}, found {found}")]
    InsufficientColumns { expected: usize, found: usize },

    #[error("invalid {field} '{value}': {source}")]
    InvalidInteger {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid {field} '{value}': {source}")]
    InvalidFloat {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum VariantCoreError {
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Invalid record on line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: RecordError,
    },
}

impl VariantCoreError {
    /// The 1-based line number of the offending line, if the error came
    /// from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            VariantCoreError::InvalidRecord { line, .. } => Some(*line),
            VariantCoreError::IOError(_) => None,
        }
    }

    pub fn record_error(&self) -> Option<&RecordError> {
        match self {
            VariantCoreError::InvalidRecord { source, .. } => Some(source),
            VariantCoreError::IOError(_) => None,
        }
    }
}
