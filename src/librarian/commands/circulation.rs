//! Issuing and returning copies.
//!
//! Both operations move `issued_count` by one and keep it within
//! `0..=total_copies`; a request that would leave that range fails without
//! touching the book.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::store::{BookStore, StorageBackend};

use super::helpers::{book_mut, persist};

pub fn issue<B: StorageBackend>(store: &mut BookStore<B>, id: &str) -> Result<CmdResult> {
    let book = book_mut(store, id)?;
    if book.available() == 0 {
        return Err(LibraryError::NoCopiesAvailable {
            id: book.id.clone(),
            total: book.total_copies,
            issued: book.issued_count,
        });
    }
    book.issued_count += 1;
    let book = book.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book issued: {} ({} of {} still available)",
        book.title,
        book.available(),
        book.total_copies
    )));
    persist(store, &mut result);
    Ok(result.with_affected_books(vec![book]))
}

pub fn return_copy<B: StorageBackend>(store: &mut BookStore<B>, id: &str) -> Result<CmdResult> {
    let book = book_mut(store, id)?;
    if book.issued_count == 0 {
        return Err(LibraryError::NothingToReturn(book.id.clone()));
    }
    book.issued_count -= 1;
    let book = book.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book returned: {} ({} of {} available)",
        book.title,
        book.available(),
        book.total_copies
    )));
    persist(store, &mut result);
    Ok(result.with_affected_books(vec![book]))
}
