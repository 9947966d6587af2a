use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Birthday, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::validation;

/// One contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order and may
/// contain duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Creates a record with no phones and no birthday. The name is
    /// trimmed; a blank name is rejected, anything else is accepted.
    pub fn new(name: &str) -> BookResult<Self> {
        let name = validation::non_blank(name, "name")?;
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validates and appends a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Removes every phone equal to `raw`. No-op if none match.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its
    /// position. Later entries equal to `old` are left untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new)?;
        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(i) => {
                self.phones[i] = replacement;
                Ok(())
            }
            None => Err(BookError::phone_not_found(old)),
        }
    }

    /// First phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Validates and sets the birthday, replacing any existing one.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "(none)".to_string()
        } else {
            self.phones
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        };
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(none)".into());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
