use crate::book::AddressBook;
use crate::commands::{require_mut, CmdMessage, CmdResult};
use crate::error::Result;

/// Sets the birthday for `name`, or clears it when `date` is `None`.
pub fn run(book: &mut AddressBook, name: &str, date: Option<&str>) -> Result<CmdResult> {
    let record = require_mut(book, name)?;
    let message = match date {
        Some(date) => {
            record.set_birthday(date)?;
            format!("Birthday for {} set to {}", name, date)
        }
        None => {
            record.clear_birthday();
            format!("Birthday for {} cleared", name)
        }
    };

    let mut result = CmdResult::default()
        .with_listed_records(vec![record.clone()])
        .modified();
    result.add_message(CmdMessage::success(message));
    Ok(result)
}
