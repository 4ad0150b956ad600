use crate::book::AddressBook;
use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::Result;
use chrono::{Local, NaiveDateTime};

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    run_at(book, name, Local::now().naive_local())
}

pub(crate) fn run_at(book: &AddressBook, name: &str, now: NaiveDateTime) -> Result<CmdResult> {
    let record = require(book, name)?;

    let mut result = CmdResult::default().with_listed_records(vec![record.clone()]);
    match record.days_to_birthday_from(now) {
        Some(0) => result.add_message(CmdMessage::success("Next birthday is less than a day away")),
        Some(1) => result.add_message(CmdMessage::info("Next birthday in 1 day")),
        Some(days) => result.add_message(CmdMessage::info(format!(
            "Next birthday in {} days",
            days
        ))),
        None => {}
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RolodexError;
    use crate::record::Record;

    fn noon(date: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date} 12:00:00"), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn shows_contact_with_birthday_countdown() {
        let mut book = AddressBook::new();
        book.add_record(Record::with_birthday("Ann", "1990-05-20").unwrap());

        let result = run_at(&book, "Ann", noon("2024-05-16")).unwrap();
        assert_eq!(result.listed_records[0].name().as_str(), "Ann");
        assert_eq!(result.messages[0].content, "Next birthday in 3 days");
    }

    #[test]
    fn contact_without_birthday_has_no_message() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Bob"));

        let result = run(&book, "Bob").unwrap();
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unknown_contact_is_an_error() {
        let err = run(&AddressBook::new(), "Nobody").unwrap_err();
        assert!(matches!(err, RolodexError::ContactNotFound(_)));
    }
}
