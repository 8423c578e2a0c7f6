//! Note model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attachment::Attachment;

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A saved note. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Unique identifier, the only lookup and delete key
    pub id: NoteId,
    /// Text as typed, never blank
    pub text: String,
    /// Generic attachment
    pub file: Option<Attachment>,
    /// Image attachment, rendered as a preview
    pub image: Option<Attachment>,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Note {
    /// Create a note with a fresh id.
    ///
    /// Callers are expected to have validated `text`; see
    /// [`Draft::validate`](crate::board::Draft::validate).
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        file: Option<Attachment>,
        image: Option<Attachment>,
    ) -> Self {
        Self {
            id: NoteId::new(),
            text: text.into(),
            file,
            image,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}
