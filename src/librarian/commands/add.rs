use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::model::{Book, DEFAULT_ISSUED_COUNT};
use crate::store::{BookStore, StorageBackend};

use super::helpers::{normalize_id, persist};

pub fn run<B: StorageBackend>(store: &mut BookStore<B>, book: Book) -> Result<CmdResult> {
    let id = normalize_id(&book.id).to_string();
    if id.is_empty() {
        return Err(LibraryError::Validation("Book ID cannot be empty.".into()));
    }
    if store.contains(&id) {
        return Err(LibraryError::DuplicateKey(id));
    }

    // New books start with every copy on the shelf.
    let book = Book {
        id,
        issued_count: DEFAULT_ISSUED_COUNT,
        ..book
    };
    store.insert(book.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added: {} ({} copies)",
        book.title, book.total_copies
    )));
    persist(store, &mut result);
    Ok(result.with_affected_books(vec![book]))
}
