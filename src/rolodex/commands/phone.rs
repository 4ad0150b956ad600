use crate::book::AddressBook;
use crate::commands::{require_mut, CmdMessage, CmdResult};
use crate::error::Result;

pub fn add(book: &mut AddressBook, name: &str, number: &str) -> Result<CmdResult> {
    let record = require_mut(book, name)?;
    record.add_phone(number)?;

    let mut result = CmdResult::default()
        .with_listed_records(vec![record.clone()])
        .modified();
    result.add_message(CmdMessage::success(format!(
        "Phone {} added to {}",
        number, name
    )));
    Ok(result)
}

pub fn remove(book: &mut AddressBook, name: &str, number: &str) -> Result<CmdResult> {
    let record = require_mut(book, name)?;
    let removed = record.remove_phone(number);

    let mut result = CmdResult::default().with_listed_records(vec![record.clone()]);
    if removed {
        result = result.modified();
        result.add_message(CmdMessage::success(format!(
            "Phone {} removed from {}",
            number, name
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} has no phone {}",
            name, number
        )));
    }
    Ok(result)
}

pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = require_mut(book, name)?;
    record.edit_phone(old, new)?;

    let mut result = CmdResult::default()
        .with_listed_records(vec![record.clone()])
        .modified();
    result.add_message(CmdMessage::success(format!(
        "Phone {} changed to {} for {}",
        old, new, name
    )));
    Ok(result)
}
