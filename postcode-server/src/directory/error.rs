//! Directory error types.

use std::path::PathBuf;

use crate::domain::{Country, InvalidPostalCode};

/// A structural problem in a postal dataset.
///
/// Every variant carries the 1-based line number of the offending row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// Row does not have exactly six `;`-separated fields
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Code field is not a digit string
    #[error("line {line}: {source}")]
    Code {
        line: usize,
        source: InvalidPostalCode,
    },

    /// City field is empty
    #[error("line {line}: city must not be empty")]
    EmptyCity { line: usize },

    /// Province flag is neither `True` nor `False`
    #[error("line {line}: invalid province flag {value:?}")]
    ProvinceFlag { line: usize, value: String },

    /// Country code is not a known country
    #[error("line {line}: invalid country code {value:?}")]
    CountryCode { line: usize, value: String },

    /// Row belongs to a different country than the directory
    #[error("line {line}: row belongs to {found}, expected {expected}")]
    CountryMismatch {
        line: usize,
        expected: Country,
        found: Country,
    },
}

/// Errors from building or reconfiguring a [`PostalDirectory`](super::PostalDirectory).
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The dataset text could not be parsed
    #[error("malformed dataset: {0}")]
    Dataset(#[from] DatasetError),

    /// Digit count of zero was requested
    #[error("digit count must be positive")]
    InvalidDigitCount,

    /// No snapshot is bundled for this country
    #[error("no embedded dataset for {0}")]
    NoEmbeddedDataset(Country),

    /// External snapshot file could not be read
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
