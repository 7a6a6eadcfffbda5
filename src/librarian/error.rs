use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Book ID '{0}' exists. Use update to change copies.")]
    DuplicateKey(String),

    #[error("Book ID '{0}' not found.")]
    NotFound(String),

    #[error("No copies of '{id}' available to issue (total: {total}, issued: {issued}).")]
    NoCopiesAvailable { id: String, total: u32, issued: u32 },

    #[error("No issued copies of '{0}' to return.")]
    NothingToReturn(String),

    #[error("Malformed record '{id}': field '{field}' {reason}")]
    MalformedRecord {
        id: String,
        field: &'static str,
        reason: String,
    },

    #[error("IO error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LibraryError {
    pub(crate) fn malformed(id: &str, field: &'static str, reason: impl Into<String>) -> Self {
        LibraryError::MalformedRecord {
            id: id.to_string(),
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
