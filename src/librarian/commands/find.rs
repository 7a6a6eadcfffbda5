use crate::model::Book;
use crate::store::{BookStore, StorageBackend};

use super::helpers::normalize_id;

/// Looks a book up by id. Absence is a normal outcome, not an error.
pub fn run<B: StorageBackend>(store: &BookStore<B>, id: &str) -> Option<Book> {
    store.get(normalize_id(id)).cloned()
}
