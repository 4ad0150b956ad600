//! # Address Book
//!
//! [`AddressBook`] owns every [`Record`], keyed by contact name. Keys are unique and the
//! book remembers insertion order, which drives both [`AddressBook::iterator`] and
//! [`AddressBook::search`].
//!
//! Adding a record under a name that is already present replaces the stored record in
//! its original position ("last write wins"). Nothing warns about it.
//!
//! Persistence lives in [`crate::store`]; the book exposes it through
//! [`AddressBook::save_to_file`] and [`AddressBook::load_from_file`].

use crate::error::Result;
use crate::record::Record;
use crate::store::{self, LoadOutcome};
use std::path::Path;
use std::slice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    pub fn add_record(&mut self, record: Record) {
        match self.position_of(record.name().as_str()) {
            Some(pos) => {
                tracing::debug!(name = %record.name(), "replacing existing contact");
                self.records[pos] = record;
            }
            None => self.records.push(record),
        }
    }

    /// Removes the contact named `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position_of(name).map(|pos| self.records.remove(pos))
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Rendered pages of `page_size` records each. A trailing partial page is not produced.
    pub fn iterator(&self, page_size: usize) -> Pages<'_> {
        Pages {
            records: self.records.iter().enumerate(),
            page_size,
        }
    }

    /// Records whose name contains `query` (ignoring case) or that hold a phone number
    /// containing `query` verbatim.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Record> + 'a {
        let needle = query.to_string();
        let lowered = query.to_lowercase();
        self.records.iter().filter(move |record| {
            record.name().as_str().to_lowercase().contains(&lowered)
                || record
                    .phones()
                    .iter()
                    .any(|phone| phone.as_str().contains(needle.as_str()))
        })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        store::fs::save(self, path.as_ref())
    }

    /// Merges the records stored at `path` into this book. A missing file is not an
    /// error: the book is left untouched and [`LoadOutcome::Missing`] is returned.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadOutcome> {
        let path = path.as_ref();
        let Some(records) = store::fs::load(path)? else {
            return Ok(LoadOutcome::Missing(path.to_path_buf()));
        };

        let count = records.len();
        for record in records {
            self.add_record(record);
        }
        Ok(LoadOutcome::Loaded(count))
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

/// Iterator returned by [`AddressBook::iterator`].
///
/// Each page joins its entries with newlines; an entry reads
/// `Record <n>: Name: <name>` followed by the rendered record, with `n` counting
/// from 1 across the whole book.
pub struct Pages<'a> {
    records: std::iter::Enumerate<slice::Iter<'a, Record>>,
    page_size: usize,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.page_size == 0 {
            return None;
        }

        let mut entries = Vec::with_capacity(self.page_size);
        for (i, record) in self.records.by_ref() {
            entries.push(format!("Record {}: Name: {}\n{}", i + 1, record.name(), record));
            if entries.len() == self.page_size {
                return Some(entries.join("\n"));
            }
        }
        None
    }
}
