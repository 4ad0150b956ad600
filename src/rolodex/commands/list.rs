use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    let pages: Vec<String> = book.iterator(page_size).collect();
    let shown = pages.len() * page_size;

    let mut result = CmdResult::default().with_pages(pages);
    // Pagination only emits full pages.
    if shown < book.len() {
        result.add_message(CmdMessage::info(format!(
            "{} contact(s) not shown: last page is incomplete",
            book.len() - shown
        )));
    }
    Ok(result)
}
