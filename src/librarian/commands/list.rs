use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &BookStore<B>) -> Result<CmdResult> {
    // The catalog iterates in id order already.
    let books: Vec<_> = store.books().cloned().collect();

    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("Library is empty."));
    }
    Ok(result.with_listed_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Book;
    use crate::store::memory::MemoryBackend;

    #[test]
    fn lists_sorted_by_id() {
        let mut store = BookStore::open(MemoryBackend::new());
        for id in ["B3", "B10", "A7", "B1"] {
            add::run(&mut store, Book::new(id, "T", "A", 1)).unwrap();
        }

        let result = run(&store).unwrap();
        let ids: Vec<_> = result.listed_books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["A7", "B1", "B10", "B3"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_library_says_so() {
        let store = BookStore::open(MemoryBackend::new());
        let result = run(&store).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "Library is empty.");
    }
}
