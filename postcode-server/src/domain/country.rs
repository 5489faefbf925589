//! Country type for the shared postal dataset format.

use std::fmt;
use std::str::FromStr;

/// Error returned when a country code or name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country: {0}")]
pub struct InvalidCountry(pub String);

/// A country covered by the shared postal dataset format.
///
/// The numeric code is the value stored in the last field of every
/// dataset row.
///
/// # Examples
///
/// ```
/// use postcode_server::domain::Country;
///
/// let fo = Country::from_code(3).unwrap();
/// assert_eq!(fo, Country::FaroeIslands);
/// assert_eq!(fo.digit_count(), 3);
///
/// let gl: Country = "gl".parse().unwrap();
/// assert_eq!(gl.code(), 2);
///
/// assert!(Country::from_code(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Denmark,
    Greenland,
    FaroeIslands,
}

impl Country {
    /// Look up a country by its dataset code.
    pub fn from_code(code: u8) -> Result<Self, InvalidCountry> {
        match code {
            1 => Ok(Country::Denmark),
            2 => Ok(Country::Greenland),
            3 => Ok(Country::FaroeIslands),
            other => Err(InvalidCountry(other.to_string())),
        }
    }

    /// The code used in the dataset's `country_code` field.
    pub fn code(self) -> u8 {
        match self {
            Country::Denmark => 1,
            Country::Greenland => 2,
            Country::FaroeIslands => 3,
        }
    }

    /// Number of digits in a syntactically valid postal code.
    pub fn digit_count(self) -> usize {
        match self {
            Country::Denmark | Country::Greenland => 4,
            Country::FaroeIslands => 3,
        }
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Country::Denmark => "Denmark",
            Country::Greenland => "Greenland",
            Country::FaroeIslands => "Faroe Islands",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Country {
    type Err = InvalidCountry;

    /// Accepts ISO 3166 alpha-2 codes or the English name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dk" | "denmark" => Ok(Country::Denmark),
            "gl" | "greenland" => Ok(Country::Greenland),
            "fo" | "faroe islands" | "faroe-islands" | "faroes" => Ok(Country::FaroeIslands),
            _ => Err(InvalidCountry(s.to_string())),
        }
    }
}
