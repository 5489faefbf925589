//! Postal dataset rows and the semicolon-delimited row format.
//!
//! Each line is `code;city;street_description;company;province_flag;country_code`.
//! Fields are not escaped, so a `;` can never appear inside a field.

use crate::domain::{Country, PostalCode};

use super::error::DatasetError;

/// Number of fields in every dataset row.
pub const FIELD_COUNT: usize = 6;

/// One row of a postal dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalRecord {
    /// The postal code.
    pub code: PostalCode,

    /// City name, verbatim from the source (may carry trailing spaces).
    pub city: String,

    /// Street or area description, if the source has one.
    pub street_description: Option<String>,

    /// Company the code is reserved for, if any.
    pub company: Option<String>,

    /// Reserved flag from the shared source format.
    pub province_flag: bool,

    /// Country the row belongs to.
    pub country: Country,
}

impl PostalRecord {
    /// Create a plain code/city record with no optional fields.
    pub fn new(code: PostalCode, city: impl Into<String>, country: Country) -> Self {
        Self {
            code,
            city: city.into(),
            street_description: None,
            company: None,
            province_flag: false,
            country,
        }
    }

    /// Parse a single dataset row.
    ///
    /// `line` is the 1-based line number used in error messages.
    pub fn parse_line(text: &str, line: usize) -> Result<Self, DatasetError> {
        let fields: Vec<&str> = text.split(';').collect();
        if fields.len() != FIELD_COUNT {
            return Err(DatasetError::FieldCount {
                line,
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        let code =
            PostalCode::parse(fields[0]).map_err(|source| DatasetError::Code { line, source })?;

        // City is kept verbatim; "Tórshavn" and "Tórshavn " are distinct
        let city = fields[1];
        if city.is_empty() {
            return Err(DatasetError::EmptyCity { line });
        }

        let province_flag = match fields[4] {
            "True" => true,
            "False" => false,
            other => {
                return Err(DatasetError::ProvinceFlag {
                    line,
                    value: other.to_string(),
                });
            }
        };

        let country = fields[5]
            .parse::<u8>()
            .ok()
            .and_then(|c| Country::from_code(c).ok())
            .ok_or_else(|| DatasetError::CountryCode {
                line,
                value: fields[5].to_string(),
            })?;

        Ok(Self {
            code,
            city: city.to_string(),
            street_description: non_empty(fields[2]),
            company: non_empty(fields[3]),
            province_flag,
            country,
        })
    }

    /// The numeric country code stored in the dataset.
    pub fn country_code(&self) -> u8 {
        self.country.code()
    }
}

fn non_empty(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

/// Parse a whole dataset for one country.
///
/// Blank lines are skipped. Every other line must be a well-formed row
/// belonging to `country`; the first bad row aborts the parse.
pub fn parse_dataset(text: &str, country: Country) -> Result<Vec<PostalRecord>, DatasetError> {
    let mut records = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }

        let line = idx + 1;
        let record = PostalRecord::parse_line(raw, line)?;
        if record.country != country {
            return Err(DatasetError::CountryMismatch {
                line,
                expected: country,
                found: record.country,
            });
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_row() {
        let record = PostalRecord::parse_line("100;Tórshavn;;;False;3", 1).unwrap();
        assert_eq!(record.code.as_str(), "100");
        assert_eq!(record.city, "Tórshavn");
        assert_eq!(record.street_description, None);
        assert_eq!(record.company, None);
        assert!(!record.province_flag);
        assert_eq!(record.country, Country::FaroeIslands);
        assert_eq!(record.country_code(), 3);
    }

    #[test]
    fn keeps_trailing_space_in_city() {
        let record = PostalRecord::parse_line("110;Tórshavn ;;;False;3", 1).unwrap();
        assert_eq!(record.city, "Tórshavn ");
    }

    #[test]
    fn parse_optional_fields() {
        let record =
            PostalRecord::parse_line("3900;Nuuk;Postboks;Grønlands Selvstyre;True;2", 1).unwrap();
        assert_eq!(record.street_description.as_deref(), Some("Postboks"));
        assert_eq!(record.company.as_deref(), Some("Grønlands Selvstyre"));
        assert!(record.province_flag);
        assert_eq!(record.country, Country::Greenland);
    }

    #[test]
    fn reject_wrong_field_count() {
        assert_eq!(
            PostalRecord::parse_line("100;Tórshavn;;False;3", 5),
            Err(DatasetError::FieldCount {
                line: 5,
                expected: 6,
                found: 5
            })
        );
        assert!(matches!(
            PostalRecord::parse_line("100;Tórshavn;;;;False;3", 1),
            Err(DatasetError::FieldCount { found: 7, .. })
        ));
        assert!(matches!(
            PostalRecord::parse_line("", 1),
            Err(DatasetError::FieldCount { found: 1, .. })
        ));
    }

    #[test]
    fn reject_bad_code() {
        assert!(matches!(
            PostalRecord::parse_line("1O0;Tórshavn;;;False;3", 2),
            Err(DatasetError::Code { line: 2, .. })
        ));
        assert!(matches!(
            PostalRecord::parse_line(";Tórshavn;;;False;3", 2),
            Err(DatasetError::Code { line: 2, .. })
        ));
    }

    #[test]
    fn reject_empty_city() {
        assert_eq!(
            PostalRecord::parse_line("100;;;;False;3", 9),
            Err(DatasetError::EmptyCity { line: 9 })
        );
    }

    #[test]
    fn reject_bad_flag_and_country() {
        assert!(matches!(
            PostalRecord::parse_line("100;Tórshavn;;;false;3", 1),
            Err(DatasetError::ProvinceFlag { .. })
        ));
        assert!(matches!(
            PostalRecord::parse_line("100;Tórshavn;;;False;7", 1),
            Err(DatasetError::CountryCode { .. })
        ));
        assert!(matches!(
            PostalRecord::parse_line("100;Tórshavn;;;False;", 1),
            Err(DatasetError::CountryCode { .. })
        ));
    }

    #[test]
    fn dataset_keeps_order_and_skips_blank_lines() {
        let text = "970;Sumba;;;False;3\n\n100;Tórshavn;;;False;3\n";
        let records = parse_dataset(text, Country::FaroeIslands).unwrap();
        let codes: Vec<_> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["970", "100"]);
    }

    #[test]
    fn dataset_accepts_crlf() {
        let text = "100;Tórshavn;;;False;3\r\n110;Tórshavn ;;;False;3\r\n";
        let records = parse_dataset(text, Country::FaroeIslands).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].city, "Tórshavn ");
    }

    #[test]
    fn dataset_reports_line_numbers() {
        let text = "100;Tórshavn;;;False;3\n\n160;Argir;;False;3\n";
        assert_eq!(
            parse_dataset(text, Country::FaroeIslands),
            Err(DatasetError::FieldCount {
                line: 3,
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn dataset_rejects_other_country() {
        let text = "100;Tórshavn;;;False;3\n3900;Nuuk;;;False;2\n";
        assert_eq!(
            parse_dataset(text, Country::FaroeIslands),
            Err(DatasetError::CountryMismatch {
                line: 2,
                expected: Country::FaroeIslands,
                found: Country::Greenland,
            })
        );
    }

    #[test]
    fn empty_dataset_is_empty() {
        assert!(parse_dataset("", Country::FaroeIslands).unwrap().is_empty());
    }
}
