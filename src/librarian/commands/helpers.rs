use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::model::Book;
use crate::store::{BookStore, StorageBackend};

pub fn normalize_id(id: &str) -> &str {
    id.trim()
}

/// Looks up a book for mutation, failing with `NotFound` when absent.
pub fn book_mut<'a, B: StorageBackend>(
    store: &'a mut BookStore<B>,
    id: &str,
) -> Result<&'a mut Book> {
    let id = normalize_id(id);
    store
        .get_mut(id)
        .ok_or_else(|| LibraryError::NotFound(id.to_string()))
}

/// Converts a user-supplied number into a copy count.
pub fn copy_count(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        LibraryError::Validation(format!(
            "copy count must be a whole number between 0 and {}, got {}.",
            u32::MAX,
            value
        ))
    })
}

/// Saves after a mutation. A failed save is reported on `result` but the
/// in-memory change stands.
pub fn persist<B: StorageBackend>(store: &mut BookStore<B>, result: &mut CmdResult) {
    if let Err(e) = store.save() {
        tracing::warn!(error = %e, "save failed, keeping in-memory changes");
        result.add_message(CmdMessage::error(format!("Error saving library: {}", e)));
    }
}
