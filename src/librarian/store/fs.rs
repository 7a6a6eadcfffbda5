use super::{decode, encode, Catalog, StorageBackend};
use crate::error::{LibraryError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores the catalog in a single JSON file.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LibraryError::Persistence)?;
            }
        }
        Ok(())
    }

    /// Sibling temp file, so the final rename stays on one filesystem.
    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "library.json".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Option<Catalog>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(LibraryError::Persistence)?;
        decode(&content).map(Some)
    }

    fn save(&mut self, books: &Catalog) -> Result<()> {
        self.ensure_parent()?;
        let content = encode(books)?;

        let tmp_file = self.tmp_path();
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(LibraryError::Persistence(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(LibraryError::Persistence(e));
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
