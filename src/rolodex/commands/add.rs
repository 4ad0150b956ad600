use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::record::Record;

/// Creates a contact, or adds phones (and a birthday) to an existing one.
///
/// Every value is validated before the book is touched, so a bad phone in the
/// middle of the list leaves the book as it was.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    phones: &[String],
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let existing = book.find(name).cloned();
    let is_new = existing.is_none();
    let mut record = existing.unwrap_or_else(|| Record::new(name));

    for phone in phones {
        record.add_phone(phone.as_str())?;
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday)?;
    }

    book.add_record(record.clone());

    let mut result = CmdResult::default()
        .with_listed_records(vec![record])
        .modified();
    if is_new {
        result.add_message(CmdMessage::success(format!("Contact added: {}", name)));
    } else {
        result.add_message(CmdMessage::success(format!("Contact updated: {}", name)));
    }
    Ok(result)
}
