//! # Storage Layer
//!
//! [`BookStore`] owns the in-memory catalog: a mapping from book id to
//! [`Book`], iterated in id order. The mapping is the source of truth; the
//! backing storage is a mirror that commands rewrite after every mutation.
//!
//! Where that mirror lives is abstracted behind [`StorageBackend`]:
//!
//! - [`fs::FileBackend`]: a single JSON file, replaced atomically on save
//! - [`memory::MemoryBackend`]: keeps the encoded document in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "B1": {
//!     "id": "B1",
//!     "title": "Dune",
//!     "author": "Herbert",
//!     "totalCopies": 3,
//!     "issuedCount": 0
//!   }
//! }
//! ```
//!
//! Readers accept any JSON layout and apply the defaults of
//! [`Book::deserialize`] for missing counts.
//!
//! ## Load Failures
//!
//! A data file that cannot be read or decoded never aborts startup. The store
//! comes up empty and records a warning; the file itself is left untouched.

use crate::error::{LibraryError, Result};
use crate::model::{Book, FieldMap};
use serde_json::Value;
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// The catalog, keyed by book id.
pub type Catalog = BTreeMap<String, Book>;

/// Abstract interface for the catalog's backing storage.
pub trait StorageBackend {
    /// Read the persisted catalog. `Ok(None)` means nothing was ever saved.
    fn load(&self) -> Result<Option<Catalog>>;

    /// Replace the persisted catalog with `books` in a single write.
    fn save(&mut self, books: &Catalog) -> Result<()>;

    /// Human-readable location, used in messages.
    fn location(&self) -> String;
}

pub struct BookStore<B: StorageBackend> {
    backend: B,
    books: Catalog,
    load_warning: Option<String>,
}

impl<B: StorageBackend> BookStore<B> {
    /// Creates the store and loads it from `backend`.
    pub fn open(backend: B) -> Self {
        let mut store = Self {
            backend,
            books: Catalog::new(),
            load_warning: None,
        };
        store.load();
        store
    }

    /// Replaces the in-memory catalog with the persisted one, falling back to
    /// an empty catalog (and a warning) when it can't be read.
    pub fn load(&mut self) {
        self.load_warning = None;
        match self.backend.load() {
            Ok(Some(books)) => {
                tracing::debug!(
                    count = books.len(),
                    location = %self.backend.location(),
                    "loaded catalog"
                );
                self.books = books;
            }
            Ok(None) => {
                tracing::debug!(location = %self.backend.location(), "no data file, starting empty");
                self.books = Catalog::new();
            }
            Err(e) => {
                tracing::warn!(location = %self.backend.location(), error = %e, "failed to load catalog");
                self.load_warning = Some(format!(
                    "Warning: failed to read data file {} ({}). Starting empty library.",
                    self.backend.location(),
                    e
                ));
                self.books = Catalog::new();
            }
        }
    }

    /// Writes the whole catalog to the backend.
    pub fn save(&mut self) -> Result<()> {
        self.backend.save(&self.books)?;
        tracing::debug!(
            count = self.books.len(),
            location = %self.backend.location(),
            "saved catalog"
        );
        Ok(())
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.books.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.books.contains_key(id)
    }

    pub(crate) fn insert(&mut self, book: Book) {
        self.books.insert(book.id.clone(), book);
    }

    /// All books, in id order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Encodes the catalog as a pretty-printed JSON object keyed by id.
pub fn encode(books: &Catalog) -> Result<String> {
    let document: FieldMap = books
        .iter()
        .map(|(id, book)| (id.clone(), Value::Object(book.serialize())))
        .collect();
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Decodes a data file. Any malformed record fails the whole document.
pub fn decode(content: &str) -> Result<Catalog> {
    let document: FieldMap = serde_json::from_str(content)?;
    let mut books = Catalog::new();
    for (key, value) in &document {
        let fields = value
            .as_object()
            .ok_or_else(|| LibraryError::malformed(key, "record", "is not an object"))?;
        let book = Book::deserialize_keyed(key, fields)?;
        books.insert(book.id.clone(), book);
    }
    Ok(books)
}
