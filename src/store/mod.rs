use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::BookResult;
use crate::model::AddressBook;

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Saves the whole book to `path` as one JSON snapshot.
///
/// The snapshot is written to a sibling temp file and renamed into place,
/// so a crash mid-write leaves the previous snapshot intact.
pub fn save(book: &AddressBook, path: &Path) -> BookResult<()> {
    let json = serde_json::to_string_pretty(book)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), records = book.len(), "saved address book");
    Ok(())
}

/// Loads the book from `path`.
///
/// A missing file is a normal first run and yields an empty book. A file
/// that cannot be read or does not parse as a snapshot also yields an
/// empty book; losing a corrupt snapshot is preferred over refusing to
/// start.
pub fn load(path: &Path) -> AddressBook {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return AddressBook::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read snapshot, starting with an empty book");
            return AddressBook::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(book) => book,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "snapshot did not parse, starting with an empty book");
            AddressBook::new()
        }
    }
}
