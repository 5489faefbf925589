//! Postal code directory.
//!
//! Parses the semicolon-delimited postal datasets shared by Denmark,
//! Greenland and the Faroe Islands, and answers validation and
//! code/city lookups against the parsed rows.

mod dataset;
mod error;
mod lookup;
mod record;

pub use dataset::{FAROE_ISLANDS, GREENLAND, embedded};
pub use error::{DatasetError, DirectoryError};
pub use lookup::PostalDirectory;
pub use record::{FIELD_COUNT, PostalRecord, parse_dataset};
