use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let matches = book.search(query).cloned().collect();
    tracing::debug!(query, "searched contacts");
    Ok(CmdResult::default().with_listed_records(matches))
}
