use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    match book.delete(name) {
        Some(record) => {
            let mut result = CmdResult::default()
                .with_listed_records(vec![record])
                .modified();
            result.add_message(CmdMessage::success(format!("Contact deleted: {}", name)));
            Ok(result)
        }
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("No contact named {}", name)));
            Ok(result)
        }
    }
}
