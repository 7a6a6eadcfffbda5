use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::store::{BookStore, StorageBackend};

use super::helpers::{book_mut, copy_count, persist};

/// Sets a book's total copies. The new total may not drop below the number
/// of copies currently issued.
pub fn run<B: StorageBackend>(
    store: &mut BookStore<B>,
    id: &str,
    new_total: i64,
) -> Result<CmdResult> {
    let book = book_mut(store, id)?;
    let new_total = copy_count(new_total)?;
    if new_total < book.issued_count {
        return Err(LibraryError::Validation(format!(
            "new total copies ({}) cannot be less than currently issued copies ({}).",
            new_total, book.issued_count
        )));
    }

    let previous = book.total_copies;
    book.total_copies = new_total;
    let book = book.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated {}: total copies {} -> {}",
        book.id, previous, book.total_copies
    )));
    persist(store, &mut result);
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, circulation};
    use crate::model::Book;
    use crate::store::memory::MemoryBackend;

    fn store_with_two_issued() -> BookStore<MemoryBackend> {
        let mut store = BookStore::open(MemoryBackend::new());
        add::run(&mut store, Book::new("B1", "Dune", "Herbert", 3)).unwrap();
        circulation::issue(&mut store, "B1").unwrap();
        circulation::issue(&mut store, "B1").unwrap();
        store
    }

    #[test]
    fn refuses_total_below_issued() {
        let mut store = store_with_two_issued();
        let saves = store.backend().saves();

        let err = run(&mut store, "B1", 1).unwrap_err();
        assert!(matches!(err, LibraryError::Validation(_)));
        assert_eq!(store.get("B1").unwrap().total_copies, 3);
        assert_eq!(store.backend().saves(), saves);
    }

    #[test]
    fn allows_total_equal_to_issued() {
        let mut store = store_with_two_issued();
        run(&mut store, "B1", 2).unwrap();

        let book = store.get("B1").unwrap();
        assert_eq!(book.total_copies, 2);
        assert_eq!(book.available(), 0);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = store_with_two_issued();
        assert!(matches!(
            run(&mut store, "B2", 5).unwrap_err(),
            LibraryError::NotFound(_)
        ));
    }

    #[test]
    fn negative_total_is_invalid() {
        let mut store = store_with_two_issued();
        assert!(matches!(
            run(&mut store, "B1", -4).unwrap_err(),
            LibraryError::Validation(_)
        ));
    }

    #[test]
    fn trims_the_id() {
        let mut store = store_with_two_issued();
        run(&mut store, " B1 ", 10).unwrap();
        assert_eq!(store.get("B1").unwrap().total_copies, 10);
    }
}
