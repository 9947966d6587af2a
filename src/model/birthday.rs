use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{BookError, BookResult};

const DATE_FORMAT: &str = "%d.%m.%Y";

/// A birthday, parsed from `DD.MM.YYYY` and stored as a calendar date.
///
/// Rendering re-derives the string from the stored date, so equivalent
/// inputs always print identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a strict `DD.MM.YYYY` string: two-digit day, two-digit
    /// month, four-digit year, and a real calendar date.
    pub fn parse(raw: &str) -> BookResult<Self> {
        // chrono's %d and %m also accept one-digit fields, so the shape
        // is checked up front.
        let shape_ok = raw.len() == 10
            && raw.bytes().enumerate().all(|(i, b)| match i {
                2 | 5 => b == b'.',
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(BookError::InvalidDate {
                value: raw.to_string(),
            });
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| BookError::InvalidDate {
                value: raw.to_string(),
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_and_rerenders_identically() {
        let birthday = Birthday::parse("05.03.1987").unwrap();
        assert_eq!(birthday.to_string(), "05.03.1987");
        assert_eq!(birthday.date().day(), 5);
        assert_eq!(birthday.date().month(), 3);
        assert_eq!(birthday.date().year(), 1987);
    }

    #[test]
    fn rejects_single_digit_fields() {
        assert!(Birthday::parse("1.1.2000").is_err());
        assert!(Birthday::parse("01.1.2000").is_err());
    }

    #[test]
    fn rejects_other_formats() {
        assert!(Birthday::parse("2000-01-01").is_err());
        assert!(Birthday::parse("01/01/2000").is_err());
        assert!(Birthday::parse("01.01.00").is_err());
        assert!(Birthday::parse("").is_err());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(Birthday::parse("32.01.2000").is_err());
        assert!(Birthday::parse("31.04.2000").is_err());
        assert!(Birthday::parse("00.01.2000").is_err());
        assert!(Birthday::parse("01.13.2000").is_err());
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        assert!(Birthday::parse("29.02.2024").is_ok());
        assert!(Birthday::parse("29.02.2023").is_err());
    }

    #[test]
    fn serde_roundtrip_keeps_format() {
        let birthday = Birthday::parse("29.02.2024").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"29.02.2024\"");
        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn deserialization_rejects_bad_dates() {
        let bad: Result<Birthday, _> = serde_json::from_str("\"99.99.9999\"");
        assert!(bad.is_err());
    }
}
