//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! librarian operation, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs` and returns structured results.
//! It does no I/O of its own and holds no business rules.
//!
//! `LibraryApi<B: StorageBackend>` is generic over where the catalog lives:
//! `LibraryApi<FileBackend>` in production, `LibraryApi<MemoryBackend>` in tests.

use crate::commands;
use crate::config::LibraryConfig;
use crate::error::Result;
use crate::model::Book;
use crate::store::fs::FileBackend;
use crate::store::{BookStore, StorageBackend};

pub struct LibraryApi<B: StorageBackend> {
    store: BookStore<B>,
    top_issued: usize,
}

impl LibraryApi<FileBackend> {
    /// Opens the catalog at the configured data file.
    pub fn from_config(config: &LibraryConfig) -> Self {
        let backend = FileBackend::new(config.data_file.clone());
        Self::new(backend, config)
    }
}

impl<B: StorageBackend> LibraryApi<B> {
    pub fn new(backend: B, config: &LibraryConfig) -> Self {
        Self {
            store: BookStore::open(backend),
            top_issued: config.top_issued,
        }
    }

    /// Messages produced while loading, e.g. a data file that couldn't be read.
    pub fn load_warnings(&self) -> Vec<CmdMessage> {
        self.store
            .load_warning()
            .map(|w| vec![CmdMessage::warning(w)])
            .unwrap_or_default()
    }

    pub fn add_book(&mut self, book: Book) -> Result<CmdResult> {
        commands::add::run(&mut self.store, book)
    }

    pub fn update_copies(&mut self, id: &str, new_total: i64) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, new_total)
    }

    pub fn find_by_id(&self, id: &str) -> Option<Book> {
        commands::find::run(&self.store, id)
    }

    pub fn search(&self, keyword: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, keyword)
    }

    pub fn issue(&mut self, id: &str) -> Result<CmdResult> {
        commands::circulation::issue(&mut self.store, id)
    }

    pub fn return_copy(&mut self, id: &str) -> Result<CmdResult> {
        commands::circulation::return_copy(&mut self.store, id)
    }

    pub fn list_all(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn report(&self) -> Result<CmdResult> {
        commands::report::run(&self.store, self.top_issued)
    }

    pub fn store(&self) -> &BookStore<B> {
        &self.store
    }
}

pub use crate::commands::helpers::copy_count;
pub use crate::commands::{CmdMessage, CmdResult, InventoryReport, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraryError;
    use crate::store::memory::MemoryBackend;

    fn api() -> LibraryApi<MemoryBackend> {
        LibraryApi::new(MemoryBackend::new(), &LibraryConfig::default())
    }

    #[test]
    fn dispatches_mutations_to_the_store() {
        let mut api = api();
        api.add_book(Book::new("B1", "Dune", "Herbert", 3)).unwrap();
        api.issue("B1").unwrap();
        api.issue("B1").unwrap();
        api.return_copy("B1").unwrap();
        api.update_copies("B1", 4).unwrap();

        let book = api.find_by_id("B1").unwrap();
        assert_eq!(book.total_copies, 4);
        assert_eq!(book.issued_count, 1);
        assert_eq!(api.store().backend().saves(), 5);
    }

    #[test]
    fn report_honours_configured_limit() {
        let config = LibraryConfig {
            top_issued: 2,
            ..LibraryConfig::default()
        };
        let mut api = LibraryApi::new(MemoryBackend::new(), &config);
        for id in ["A", "B", "C"] {
            api.add_book(Book::new(id, id, "x", 1)).unwrap();
        }
        let report = api.report().unwrap().report.unwrap();
        assert_eq!(report.top_issued.len(), 2);
    }

    #[test]
    fn load_warning_is_surfaced() {
        let api = LibraryApi::new(
            MemoryBackend::with_content("garbage"),
            &LibraryConfig::default(),
        );
        let warnings = api.load_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, MessageLevel::Warning);
    }

    #[test]
    fn errors_are_returned_not_raised() {
        let mut api = api();
        assert!(matches!(api.issue("B1"), Err(LibraryError::NotFound(_))));
        assert!(api.find_by_id("B1").is_none());
    }
}
