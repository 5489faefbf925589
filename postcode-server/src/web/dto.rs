//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::directory::PostalDirectory;

/// Every postal code in the directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostalCodesResponse {
    /// Country name (e.g., "Faroe Islands")
    pub country: String,

    /// Number of digits in a valid code
    pub digit_count: usize,

    /// Codes in dataset order
    pub postal_codes: Vec<String>,
}

impl PostalCodesResponse {
    pub fn from_directory(directory: &PostalDirectory) -> Self {
        Self {
            country: directory.country().to_string(),
            digit_count: directory.digit_count(),
            postal_codes: directory
                .all_postal_codes()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Every city in the directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct CitiesResponse {
    /// Cities in dataset order, duplicates included
    pub cities: Vec<String>,
}

/// A single postal code and its city.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostalCodeResponse {
    pub code: String,
    pub valid: bool,
    pub city: String,
}

/// Query for looking up codes by city.
#[derive(Debug, Deserialize)]
pub struct CityLookupRequest {
    /// Exact city name, case and whitespace included
    pub name: String,
}

/// Codes belonging to a city.
#[derive(Debug, Serialize, Deserialize)]
pub struct CityLookupResponse {
    pub city: String,
    pub postal_codes: Vec<String>,
}

/// Result of validating a code.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub code: String,
    pub valid: bool,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
