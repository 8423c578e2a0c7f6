//! Attachment model

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::media::infer_mime_type;

/// A unique identifier for an attachment, using UUID v7.
///
/// Two picks of the same file get different ids, which is what preview
/// components key their object URLs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentId(Uuid);

impl AttachmentId {
    /// Create a new unique attachment ID using UUID v7.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for AttachmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which draft slot an attachment was picked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentSlot {
    /// Any file
    File,
    /// Image file, previewed inline
    Image,
}

/// An in-memory blob with the name it was picked under.
///
/// Bytes are shared, so cloning an attachment (into a note, a preview, or a
/// download task) never copies the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Unique attachment identifier.
    pub id: AttachmentId,
    /// Original file name, used verbatim when downloading.
    pub name: String,
    /// Content MIME type.
    pub mime_type: String,
    /// Raw content.
    pub bytes: Arc<[u8]>,
}

impl Attachment {
    /// Create an attachment, inferring the MIME type from the file name.
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let name = name.into();
        let mime_type = infer_mime_type(None, &name);
        Self::with_mime_type(name, mime_type, bytes)
    }

    /// Create an attachment with an explicit MIME type.
    pub fn with_mime_type(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            id: AttachmentId::new(),
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the MIME type denotes image data.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}
