//! noteboard-core - Core library for NoteBoard
//!
//! The note lifecycle, attachment handling, and configuration shared by the
//! NoteBoard frontends. Nothing here depends on a renderer, so every
//! transition can be tested directly.

pub mod board;
pub mod config;
pub mod download;
pub mod error;
pub mod media;
pub mod models;
pub mod object_url;
pub mod store;

pub use board::{BoardAction, BoardEvent, Draft, NoteBoard};
pub use error::{Error, Result, ValidationError};
pub use models::{Attachment, AttachmentId, AttachmentSlot, Note, NoteId};
pub use object_url::{ObjectUrl, ObjectUrlRegistry, ObjectUrlSlot};
