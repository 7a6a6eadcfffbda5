use super::{decode, encode, Catalog, StorageBackend};
use crate::error::{LibraryError, Result};
use std::io;

/// In-memory storage for testing.
///
/// Saves go through the same JSON encoding as the file backend, so a reload
/// exercises the full serialize/deserialize path. Saves can be made to fail to
/// test how commands cope with a broken disk.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    content: Option<String>,
    fail_saves: bool,
    saves: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose "file" already holds `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Catalog>> {
        self.content.as_deref().map(decode).transpose()
    }

    fn save(&mut self, books: &Catalog) -> Result<()> {
        if self.fail_saves {
            return Err(LibraryError::Persistence(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write failure",
            )));
        }
        self.content = Some(encode(books)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
