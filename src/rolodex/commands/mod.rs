use crate::book::AddressBook;
use crate::error::{RolodexError, Result};
use crate::record::Record;

pub mod add;
pub mod birthday;
pub mod delete;
pub mod list;
pub mod phone;
pub mod search;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records the command touched or found, in book order.
    pub listed_records: Vec<Record>,
    /// Rendered pages, for paginated listings.
    pub pages: Vec<String>,
    pub messages: Vec<CmdMessage>,
    /// Whether the book changed and should be written back.
    pub modified: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.pages = pages;
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }
}

pub(crate) fn require<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))
}

pub(crate) fn require_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))
}
