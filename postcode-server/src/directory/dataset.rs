//! Postal datasets bundled with the binary.

use crate::domain::Country;

/// Faroe Islands snapshot (3-digit codes, country code 3).
pub const FAROE_ISLANDS: &str = include_str!("../../data/faroe_islands.txt");

/// Greenland snapshot (4-digit codes, country code 2).
pub const GREENLAND: &str = include_str!("../../data/greenland.txt");

/// The bundled dataset for `country`, if there is one.
pub fn embedded(country: Country) -> Option<&'static str> {
    match country {
        Country::FaroeIslands => Some(FAROE_ISLANDS),
        Country::Greenland => Some(GREENLAND),
        Country::Denmark => None,
    }
}
