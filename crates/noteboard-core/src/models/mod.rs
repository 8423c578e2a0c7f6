//! Data models for NoteBoard

mod attachment;
mod note;

pub use attachment::{Attachment, AttachmentId, AttachmentSlot};
pub use note::{Note, NoteId};
