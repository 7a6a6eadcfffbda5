use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{BookStore, StorageBackend};

/// Case-insensitive substring match on title or author, in id order.
pub fn run<B: StorageBackend>(store: &BookStore<B>, keyword: &str) -> Result<CmdResult> {
    let needle = keyword.trim().to_lowercase();

    let matches = store
        .books()
        .filter(|book| {
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    Ok(CmdResult::default().with_listed_books(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Book;
    use crate::store::memory::MemoryBackend;

    fn store() -> BookStore<MemoryBackend> {
        let mut store = BookStore::open(MemoryBackend::new());
        add::run(&mut store, Book::new("B1", "Dune", "Frank Herbert", 3)).unwrap();
        add::run(&mut store, Book::new("B2", "Children of Dune", "Frank Herbert", 1)).unwrap();
        add::run(&mut store, Book::new("B3", "Neuromancer", "William Gibson", 2)).unwrap();
        store
    }

    fn ids(result: &CmdResult) -> Vec<&str> {
        result.listed_books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn matches_title_case_insensitively() {
        let result = run(&store(), "dune").unwrap();
        assert_eq!(ids(&result), vec!["B1", "B2"]);
    }

    #[test]
    fn matches_author_substring() {
        let result = run(&store(), "GIBS").unwrap();
        assert_eq!(ids(&result), vec!["B3"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(run(&store(), "tolkien").unwrap().listed_books.is_empty());
    }

    #[test]
    fn empty_keyword_matches_everything() {
        assert_eq!(run(&store(), "").unwrap().listed_books.len(), 3);
    }
}
