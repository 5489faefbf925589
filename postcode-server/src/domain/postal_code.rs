//! Postal code type.

use std::fmt;

/// Error returned when parsing an invalid postal code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid postal code: {reason}")]
pub struct InvalidPostalCode {
    reason: &'static str,
}

/// A postal code made of one or more ASCII decimal digits.
///
/// The number of digits is a property of the country, not of the code, so
/// this type only guarantees the character set. Leading zeros are kept:
/// `"010"` and `"10"` are different codes.
///
/// # Examples
///
/// ```
/// use postcode_server::domain::PostalCode;
///
/// let code = PostalCode::parse("100").unwrap();
/// assert_eq!(code.as_str(), "100");
/// assert_eq!(code.digit_count(), 3);
///
/// // Letters and whitespace are rejected
/// assert!(PostalCode::parse("1O0").is_err());
/// assert!(PostalCode::parse(" 100").is_err());
///
/// // Empty strings are rejected
/// assert!(PostalCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostalCode(String);

impl PostalCode {
    /// Parse a postal code from a string.
    ///
    /// The input must be non-empty and contain only ASCII digits (0-9).
    pub fn parse(s: &str) -> Result<Self, InvalidPostalCode> {
        if s.is_empty() {
            return Err(InvalidPostalCode {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidPostalCode {
                reason: "must contain only ASCII digits 0-9",
            });
        }

        Ok(PostalCode(s.to_string()))
    }

    /// Returns the postal code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits in the code.
    pub fn digit_count(&self) -> usize {
        // ASCII only, so bytes == chars
        self.0.len()
    }

    /// Consumes the PostalCode and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Returns true if `s` is exactly `digits` ASCII decimal digits.
///
/// This is the syntactic half of postal code validation; it never allocates
/// and never fails.
pub fn has_digit_shape(s: &str, digits: usize) -> bool {
    s.len() == digits && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Debug for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostalCode({})", self.0)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(PostalCode::parse("100").is_ok());
        assert!(PostalCode::parse("970").is_ok());
        assert!(PostalCode::parse("3900").is_ok());
        assert!(PostalCode::parse("0").is_ok());
        assert!(PostalCode::parse("000").is_ok());
    }

    #[test]
    fn keeps_leading_zeros() {
        let code = PostalCode::parse("010").unwrap();
        assert_eq!(code.as_str(), "010");
        assert_ne!(code, PostalCode::parse("10").unwrap());
    }

    #[test]
    fn reject_empty() {
        assert!(PostalCode::parse("").is_err());
    }

    #[test]
    fn reject_non_digits() {
        assert!(PostalCode::parse("abc").is_err());
        assert!(PostalCode::parse("10a").is_err());
        assert!(PostalCode::parse("1 0").is_err());
        assert!(PostalCode::parse("-10").is_err());
        assert!(PostalCode::parse("100 ").is_err());
        // Non-ASCII digits (Arabic-Indic) are not postal code digits
        assert!(PostalCode::parse("١٠٠").is_err());
    }

    #[test]
    fn error_message() {
        let err = PostalCode::parse("x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid postal code: must contain only ASCII digits 0-9"
        );
    }

    #[test]
    fn digit_shape() {
        assert!(has_digit_shape("100", 3));
        assert!(!has_digit_shape("100", 4));
        assert!(!has_digit_shape("10", 3));
        assert!(!has_digit_shape("9999", 3));
        assert!(!has_digit_shape("abc", 3));
        assert!(!has_digit_shape("", 3));
        assert!(has_digit_shape("", 0));
    }

    #[test]
    fn display_and_debug() {
        let code = PostalCode::parse("188").unwrap();
        assert_eq!(format!("{}", code), "188");
        assert_eq!(format!("{:?}", code), "PostalCode(188)");
    }

    #[test]
    fn into_inner() {
        let code = PostalCode::parse("700").unwrap();
        assert_eq!(code.into_inner(), "700".to_string());
    }
}
