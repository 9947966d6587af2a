use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use super::Record;

/// All records, keyed by contact name. One record per name; adding under
/// an existing name replaces the old record wholesale.
///
/// Name-ordered, so listings and scans iterate deterministically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record under its own name, discarding any previous
    /// record held under that name.
    pub fn add(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes the record if present. No-op if absent.
    pub fn delete(&mut self, name: &str) {
        self.records.remove(name);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// The snapshot form is a plain array of records; the map is rebuilt from
// each record's own name on load, so key and name cannot disagree.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add(record);
        }
        Ok(book)
    }
}
