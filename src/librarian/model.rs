use crate::error::{LibraryError, Result};
use serde_json::{Map, Value};

/// Generic string-keyed representation of a book, as stored on disk.
pub type FieldMap = Map<String, Value>;

pub const DEFAULT_TOTAL_COPIES: u32 = 1;
pub const DEFAULT_ISSUED_COUNT: u32 = 0;

// Accepted keys per field, canonical first. The snake_case forms are what
// older data files used.
const ID_KEYS: &[&str] = &["id", "book_id"];
const TITLE_KEYS: &[&str] = &["title"];
const AUTHOR_KEYS: &[&str] = &["author"];
const TOTAL_KEYS: &[&str] = &["totalCopies", "total_copies"];
const ISSUED_KEYS: &[&str] = &["issuedCount", "issued_count"];

/// One catalog entry.
///
/// `issued_count <= total_copies` is maintained by the commands that mutate a
/// book; availability is always derived from the two counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub total_copies: u32,
    pub issued_count: u32,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        total_copies: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            total_copies,
            issued_count: DEFAULT_ISSUED_COUNT,
        }
    }

    /// Copies currently on the shelf.
    pub fn available(&self) -> u32 {
        self.total_copies.saturating_sub(self.issued_count)
    }

    pub fn serialize(&self) -> FieldMap {
        let mut fields = Map::new();
        fields.insert(ID_KEYS[0].into(), Value::from(self.id.clone()));
        fields.insert(TITLE_KEYS[0].into(), Value::from(self.title.clone()));
        fields.insert(AUTHOR_KEYS[0].into(), Value::from(self.author.clone()));
        fields.insert(TOTAL_KEYS[0].into(), Value::from(self.total_copies));
        fields.insert(ISSUED_KEYS[0].into(), Value::from(self.issued_count));
        fields
    }

    /// Builds a book from a field map, applying the defaults for missing counts.
    pub fn deserialize(fields: &FieldMap) -> Result<Self> {
        Self::from_fields(None, fields)
    }

    /// Like [`Book::deserialize`], for a record stored under `key` in the data
    /// file. The key is the book's id; a stored `id` that disagrees is ignored.
    pub fn deserialize_keyed(key: &str, fields: &FieldMap) -> Result<Self> {
        Self::from_fields(Some(key), fields)
    }

    fn from_fields(key: Option<&str>, fields: &FieldMap) -> Result<Self> {
        let label = key.unwrap_or("<unknown>");
        let stored_id = lookup(fields, ID_KEYS)
            .map(|value| coerce_text(label, "id", value))
            .transpose()?;
        let id = match (key, stored_id) {
            // The catalog is keyed by the map key, so it wins over the stored id.
            (Some(key), Some(stored)) => {
                if stored != key {
                    tracing::warn!(key, stored_id = %stored, "record id differs from its key, using the key");
                }
                key.to_string()
            }
            (Some(key), None) => key.to_string(),
            (None, Some(stored)) => stored,
            (None, None) => return Err(LibraryError::malformed(label, "id", "is missing")),
        };
        if id.trim().is_empty() {
            return Err(LibraryError::malformed(label, "id", "is empty"));
        }

        let title = required_text(&id, "title", TITLE_KEYS, fields)?;
        let author = required_text(&id, "author", AUTHOR_KEYS, fields)?;
        let total_copies = optional_count(&id, "totalCopies", TOTAL_KEYS, fields, DEFAULT_TOTAL_COPIES)?;
        let issued_count = optional_count(&id, "issuedCount", ISSUED_KEYS, fields, DEFAULT_ISSUED_COUNT)?;

        if issued_count > total_copies {
            return Err(LibraryError::malformed(
                &id,
                "issuedCount",
                format!("({}) exceeds totalCopies ({})", issued_count, total_copies),
            ));
        }

        Ok(Self {
            id,
            title,
            author,
            total_copies,
            issued_count,
        })
    }
}

/// First non-null value among `keys`.
fn lookup<'a>(fields: &'a FieldMap, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| fields.get(*k))
        .find(|v| !v.is_null())
}

fn coerce_text(id: &str, field: &'static str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(LibraryError::malformed(
            id,
            field,
            format!("is not text: {}", other),
        )),
    }
}

fn required_text(
    id: &str,
    field: &'static str,
    keys: &[&str],
    fields: &FieldMap,
) -> Result<String> {
    match lookup(fields, keys) {
        Some(value) => coerce_text(id, field, value),
        None => Err(LibraryError::malformed(id, field, "is missing")),
    }
}

fn optional_count(
    id: &str,
    field: &'static str,
    keys: &[&str],
    fields: &FieldMap,
    default: u32,
) -> Result<u32> {
    match lookup(fields, keys) {
        Some(value) => coerce_count(id, field, value),
        None => Ok(default),
    }
}

/// Accepts JSON integers, integral floats and numeric strings.
fn coerce_count(id: &str, field: &'static str, value: &Value) -> Result<u32> {
    let invalid = || LibraryError::malformed(id, field, format!("is not a valid count: {}", value));

    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).map_err(|_| invalid())
            } else if let Some(f) = n.as_f64() {
                if f.is_finite() && f.fract() == 0.0 && f >= 0.0 && f <= f64::from(u32::MAX) {
                    Ok(f as u32)
                } else {
                    Err(invalid())
                }
            } else {
                Err(invalid())
            }
        }
        Value::String(s) => s.trim().parse::<u32>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
