//! Domain types for the postal code directory.
//!
//! These types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod country;
mod postal_code;

pub use country::{Country, InvalidCountry};
pub use postal_code::{InvalidPostalCode, PostalCode, has_digit_shape};
