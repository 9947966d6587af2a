use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{BookError, BookResult};

/// A phone number: exactly ten ASCII digits, stored as entered.
///
/// No normalization is applied; leading zeros are kept and no separators
/// are ever added or stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: &str) -> BookResult<Self> {
        if raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(BookError::InvalidPhone {
                value: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserialization re-validates, so a snapshot with a malformed number is
// rejected as a whole instead of producing an invalid value.
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ten_digits() {
        let phone = PhoneNumber::new("0123456789").unwrap();
        assert_eq!(phone.as_str(), "0123456789");
    }

    #[test]
    fn keeps_leading_zeros() {
        let phone = PhoneNumber::new("0001112222").unwrap();
        assert_eq!(phone.to_string(), "0001112222");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123456789").is_err());
        assert!(PhoneNumber::new("12345678901").is_err());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(PhoneNumber::new("123-456-78").is_err());
        assert!(PhoneNumber::new("+123456789").is_err());
        assert!(PhoneNumber::new("12345 6789").is_err());
        assert!(PhoneNumber::new("abcdefghij").is_err());
    }

    #[test]
    fn serializes_as_digit_string() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"5551234567\"");
    }

    #[test]
    fn deserializes_with_validation() {
        let phone: PhoneNumber = serde_json::from_str("\"5551234567\"").unwrap();
        assert_eq!(phone.as_str(), "5551234567");

        let bad: Result<PhoneNumber, _> = serde_json::from_str("\"555-123\"");
        assert!(bad.is_err());
    }
}
