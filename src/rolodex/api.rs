//! # API Facade
//!
//! [`RolodexApi`] is the single entry point for UI clients. It owns an [`AddressBook`]
//! backed by a file, dispatches to the command layer, and writes the book back after
//! every command that reports a modification.
//!
//! Like the commands it wraps, the API never prints: it returns [`CmdResult`] values
//! and leaves presentation to the caller.

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::LoadOutcome;
use std::path::{Path, PathBuf};

pub struct RolodexApi {
    book: AddressBook,
    path: PathBuf,
    outcome: LoadOutcome,
}

impl RolodexApi {
    /// Loads the book stored at `path`. A missing file yields an empty book.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut book = AddressBook::new();
        let outcome = book.load_from_file(&path)?;
        Ok(Self {
            book,
            path,
            outcome,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    /// Messages describing how the book was opened.
    pub fn open_messages(&self) -> Vec<commands::CmdMessage> {
        match &self.outcome {
            LoadOutcome::Missing(path) => vec![commands::CmdMessage::warning(format!(
                "No address book at {}; starting empty",
                path.display()
            ))],
            LoadOutcome::Loaded(_) => Vec::new(),
        }
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn list(&self, page_size: usize) -> Result<commands::CmdResult> {
        commands::list::run(&self.book, page_size)
    }

    pub fn show(&self, name: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.book, name)
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phones: &[String],
        birthday: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.book, name, phones, birthday)?;
        self.persist(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.book, name)?;
        self.persist(result)
    }

    pub fn add_phone(&mut self, name: &str, number: &str) -> Result<commands::CmdResult> {
        let result = commands::phone::add(&mut self.book, name, number)?;
        self.persist(result)
    }

    pub fn remove_phone(&mut self, name: &str, number: &str) -> Result<commands::CmdResult> {
        let result = commands::phone::remove(&mut self.book, name, number)?;
        self.persist(result)
    }

    pub fn edit_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<commands::CmdResult> {
        let result = commands::phone::edit(&mut self.book, name, old, new)?;
        self.persist(result)
    }

    pub fn set_birthday(
        &mut self,
        name: &str,
        date: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let result = commands::birthday::run(&mut self.book, name, date)?;
        self.persist(result)
    }

    fn persist(&self, result: commands::CmdResult) -> Result<commands::CmdResult> {
        if result.modified {
            self.book.save_to_file(&self.path)?;
        }
        Ok(result)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
