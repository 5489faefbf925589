//! Postal code lookup and validation.

use std::path::Path;

use tracing::debug;

use crate::domain::{Country, has_digit_shape};

use super::dataset;
use super::error::DirectoryError;
use super::record::{PostalRecord, parse_dataset};

/// In-memory postal code directory for one country.
///
/// Records keep the order they were declared in the dataset. Lookups are
/// linear scans; the datasets are a few hundred rows at most.
///
/// The directory is `Send + Sync` and safe to share for concurrent reads.
/// Mutation needs `&mut self`, so callers sharing it behind an `Arc` can
/// only read.
///
/// # Examples
///
/// ```
/// use postcode_server::directory::PostalDirectory;
///
/// let directory = PostalDirectory::new().unwrap();
/// assert!(directory.validate("100"));
/// assert!(!directory.validate("999"));
/// assert_eq!(directory.city_from_postal_code("100"), "Tórshavn");
/// assert_eq!(directory.postal_codes_from_city("Tórshavn"), vec!["100"]);
/// ```
#[derive(Debug, Clone)]
pub struct PostalDirectory {
    records: Vec<PostalRecord>,
    digit_count: usize,
    country: Country,
}

impl PostalDirectory {
    /// Load the bundled Faroe Islands directory.
    pub fn new() -> Result<Self, DirectoryError> {
        Self::faroe_islands()
    }

    /// Load the bundled Faroe Islands directory.
    pub fn faroe_islands() -> Result<Self, DirectoryError> {
        Self::from_dataset(dataset::FAROE_ISLANDS, Country::FaroeIslands)
    }

    /// Load the bundled Greenland directory.
    pub fn greenland() -> Result<Self, DirectoryError> {
        Self::from_dataset(dataset::GREENLAND, Country::Greenland)
    }

    /// Load the bundled directory for `country`.
    ///
    /// Fails with [`DirectoryError::NoEmbeddedDataset`] if no snapshot is
    /// bundled for that country.
    pub fn for_country(country: Country) -> Result<Self, DirectoryError> {
        let text = dataset::embedded(country).ok_or(DirectoryError::NoEmbeddedDataset(country))?;
        Self::from_dataset(text, country)
    }

    /// Parse a directory from dataset text.
    ///
    /// The digit count is the country's default.
    pub fn from_dataset(text: &str, country: Country) -> Result<Self, DirectoryError> {
        let records = parse_dataset(text, country)?;
        debug!(%country, records = records.len(), "loaded postal dataset");

        Ok(Self {
            records,
            digit_count: country.digit_count(),
            country,
        })
    }

    /// Read a directory from an external snapshot file.
    pub fn from_path(path: impl AsRef<Path>, country: Country) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "read postal dataset file");
        Self::from_dataset(&text, country)
    }

    /// Country the directory was loaded for.
    pub fn country(&self) -> Country {
        self.country
    }

    /// Check whether `input` is a known postal code.
    ///
    /// True only if `input` is exactly [`digit_count`](Self::digit_count)
    /// ASCII digits and matches a record's code exactly. No trimming or
    /// numeric coercion is applied.
    pub fn validate(&self, input: &str) -> bool {
        has_digit_shape(input, self.digit_count)
            && self.records.iter().any(|r| r.code.as_str() == input)
    }

    /// All postal codes, in dataset order.
    pub fn all_postal_codes(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.code.as_str()).collect()
    }

    /// All city names, in dataset order. Cities are not unique.
    pub fn all_cities(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.city.as_str()).collect()
    }

    /// City of the first record whose code equals `code`.
    ///
    /// Returns an empty string if no record matches.
    pub fn city_from_postal_code(&self, code: &str) -> &str {
        self.records
            .iter()
            .find(|r| r.code.as_str() == code)
            .map(|r| r.city.as_str())
            .unwrap_or("")
    }

    /// Codes of every record whose city equals `city` exactly.
    ///
    /// Matching is case-sensitive and whitespace-sensitive.
    pub fn postal_codes_from_city(&self, city: &str) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.city == city)
            .map(|r| r.code.as_str())
            .collect()
    }

    /// Number of digits a code must have to pass [`validate`](Self::validate).
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Change the number of digits accepted by [`validate`](Self::validate).
    ///
    /// Stored records are not touched. Zero is rejected.
    pub fn set_digit_count(&mut self, digit_count: usize) -> Result<(), DirectoryError> {
        if digit_count == 0 {
            return Err(DirectoryError::InvalidDigitCount);
        }
        self.digit_count = digit_count;
        Ok(())
    }

    /// The records, in dataset order.
    pub fn records(&self) -> &[PostalRecord] {
        &self.records
    }

    /// Replace every record.
    pub fn set_records(&mut self, records: Vec<PostalRecord>) {
        debug!(records = records.len(), "replacing postal records");
        self.records = records;
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
