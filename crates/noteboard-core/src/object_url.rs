//! Transient object URLs for in-memory attachments.
//!
//! [`ObjectUrlRegistry::create`] hands out an [`ObjectUrl`] that resolves to
//! its attachment for as long as the handle lives. Dropping the handle revokes
//! the URL, so every exit path of a download or a preview releases it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use uuid::Uuid;

use crate::media::data_uri;
use crate::models::{Attachment, AttachmentId};

const URL_PREFIX: &str = "blob:noteboard/";

/// Shared table of live object URLs.
#[derive(Debug, Clone, Default)]
pub struct ObjectUrlRegistry {
    entries: Arc<Mutex<HashMap<Uuid, Attachment>>>,
}

impl ObjectUrlRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `attachment` and return a handle that revokes it on drop.
    pub fn create(&self, attachment: &Attachment) -> ObjectUrl {
        let key = Uuid::now_v7();
        self.lock().insert(key, attachment.clone());

        let url = ObjectUrl {
            key,
            href: format!("{URL_PREFIX}{key}"),
            attachment: attachment.clone(),
            registry: self.clone(),
            src: OnceLock::new(),
        };
        tracing::debug!(url = %url.href, name = %attachment.name, "Object URL created");
        url
    }

    /// Look up the attachment behind a live URL.
    #[cfg(test)]
    pub(crate) fn resolve(&self, href: &str) -> Option<Attachment> {
        let key = href
            .strip_prefix(URL_PREFIX)
            .and_then(|raw| Uuid::parse_str(raw).ok())?;
        self.lock().get(&key).cloned()
    }

    /// Number of URLs not yet revoked.
    pub fn live_count(&self) -> usize {
        self.lock().len()
    }

    fn revoke(&self, key: &Uuid) {
        if self.lock().remove(key).is_some() {
            tracing::debug!(url = %format!("{URL_PREFIX}{key}"), "Object URL revoked");
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Attachment>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A live object URL. Revoked when dropped.
#[derive(Debug)]
pub struct ObjectUrl {
    key: Uuid,
    href: String,
    attachment: Attachment,
    registry: ObjectUrlRegistry,
    src: OnceLock<String>,
}

impl ObjectUrl {
    /// The `blob:` URL string.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The attachment this URL points at.
    pub const fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    /// Id of the attachment, used to detect when a preview must be replaced.
    pub const fn attachment_id(&self) -> AttachmentId {
        self.attachment.id
    }

    /// Inline `data:` source for the webview, encoded on first use.
    pub fn render_src(&self) -> &str {
        self.src
            .get_or_init(|| data_uri(&self.attachment.mime_type, &self.attachment.bytes))
    }

    /// Whether the registry still resolves this URL.
    #[cfg(test)]
    pub(crate) fn is_live(&self) -> bool {
        self.registry.lock().contains_key(&self.key)
    }
}

impl PartialEq for ObjectUrl {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ObjectUrl {}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        self.registry.revoke(&self.key);
    }
}

/// Holds at most one preview URL and swaps it when the attachment changes.
///
/// Preview components keep one of these for their lifetime; dropping the slot
/// (component unmount) revokes whatever it holds.
#[derive(Debug, Default)]
pub struct ObjectUrlSlot {
    current: Option<ObjectUrl>,
}

impl ObjectUrlSlot {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// URL for `attachment`, reusing the held one when it already matches.
    pub fn acquire(
        &mut self,
        registry: &ObjectUrlRegistry,
        attachment: &Attachment,
    ) -> &ObjectUrl {
        let reusable = self
            .current
            .as_ref()
            .is_some_and(|url| url.attachment_id() == attachment.id);
        if !reusable {
            // Assigning drops the previous handle, revoking it.
            self.current = Some(registry.create(attachment));
        }
        self.current.get_or_insert_with(|| registry.create(attachment))
    }

    /// Revoke the held URL, if any.
    pub fn release(&mut self) {
        self.current = None;
    }
}
