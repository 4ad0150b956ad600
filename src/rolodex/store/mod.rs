//! # Storage Layer
//!
//! Converts an [`AddressBook`] to and from the JSON document kept on disk.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "John": {
//!         "name": "John",
//!         "phones": ["1234567890", "5555555555"],
//!         "birthday": "1990-05-17"
//!     },
//!     "Jane": {
//!         "name": "Jane",
//!         "phones": ["9876543210"],
//!         "birthday": null
//!     }
//! }
//! ```
//!
//! Top-level keys follow book order. Saving builds a [`BookDocument`] from the live
//! records and never touches them; loading re-validates every phone and birthday through
//! the normal constructors, so a hand-edited file cannot smuggle in bad values.
//!
//! - [`fs`]: reading and writing the document (atomic rename on write)

use crate::book::AddressBook;
use crate::error::Result;
use crate::record::Record;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

pub mod fs;

/// Result of [`AddressBook::load_from_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Number of records read from the file.
    Loaded(usize),
    /// The file does not exist; nothing was loaded.
    Missing(PathBuf),
}

impl LoadOutcome {
    pub fn is_missing(&self) -> bool {
        matches!(self, LoadOutcome::Missing(_))
    }
}

/// One contact as it appears in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    // Older files may omit it; the top-level key is used instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    /// Only a string value is read as a birthday; anything else loads as none.
    #[serde(default)]
    pub birthday: Option<Value>,
}

impl StoredRecord {
    fn from_record(record: &Record) -> Self {
        Self {
            name: Some(record.name().to_string()),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday().map(|b| Value::String(b.to_string())),
        }
    }

    fn into_record(self, key: String) -> Result<Record> {
        let mut record = Record::new(self.name.unwrap_or(key));
        if let Some(Value::String(birthday)) = &self.birthday {
            record.set_birthday(birthday)?;
        }
        for phone in self.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}

/// The whole file: contact name to [`StoredRecord`], in book order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDocument {
    entries: Vec<(String, StoredRecord)>,
}

impl BookDocument {
    pub fn from_book(book: &AddressBook) -> Self {
        let entries = book
            .records()
            .map(|r| (r.name().to_string(), StoredRecord::from_record(r)))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_records(self) -> Result<Vec<Record>> {
        self.entries
            .into_iter()
            .map(|(key, stored)| stored.into_record(key))
            .collect()
    }
}

impl Serialize for BookDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for BookDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = BookDocument;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object keyed by contact name")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<BookDocument, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, StoredRecord>()? {
            entries.push((key, value));
        }
        Ok(BookDocument { entries })
    }
}
