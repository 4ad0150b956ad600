use super::BookDocument;
use crate::book::AddressBook;
use crate::error::{RolodexError, Result};
use crate::record::Record;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use uuid::Uuid;

const INDENT: &[u8] = b"    ";

/// Writes the whole book to `path`, replacing any previous file.
///
/// The document goes to a temporary sibling first and is then renamed over the
/// target, so readers see either the old file or the new one.
pub fn save(book: &AddressBook, path: &Path) -> Result<()> {
    let document = BookDocument::from_book(book);
    let content = to_pretty_json(&document)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data.json".to_string());
    let tmp_path = path.with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    fs::write(&tmp_path, content).map_err(|source| RolodexError::FileAccess {
        path: tmp_path.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(RolodexError::FileAccess {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::debug!(path = %path.display(), records = document.len(), "saved address book");
    Ok(())
}

/// Reads the records stored at `path`, or `None` when there is no such file.
pub fn load(path: &Path) -> Result<Option<Vec<Record>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "address book file not found");
            return Ok(None);
        }
        Err(source) => {
            return Err(RolodexError::FileAccess {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let document: BookDocument = serde_json::from_str(&content)?;
    let records = document.into_records()?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded address book");
    Ok(Some(records))
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
