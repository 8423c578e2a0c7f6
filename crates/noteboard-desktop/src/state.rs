//! Application state management
//!
//! Board state shared with components via a Dioxus context provider.

use std::path::PathBuf;

use dioxus::prelude::*;

use noteboard_core::{BoardAction, BoardEvent, NoteBoard, ObjectUrlRegistry};

use crate::theme::ResolvedTheme;

/// State owned by the root component
#[derive(Clone, Copy)]
pub struct AppState {
    /// Draft and saved notes
    pub board: Signal<NoteBoard>,
    /// Live object URLs for previews and downloads
    pub urls: Signal<ObjectUrlRegistry>,
    /// Resolved theme (light/dark based on config and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Directory for dialog-free downloads, if configured
    pub download_dir: Signal<Option<PathBuf>>,
}

impl AppState {
    /// Run one board transition.
    ///
    /// The in-memory store cannot fail, but any store error is logged rather
    /// than surfaced.
    pub fn dispatch(&self, action: BoardAction) -> Option<BoardEvent> {
        let mut board = self.board;
        let result = board.write().apply(action);
        match result {
            Ok(event) => {
                tracing::debug!(?event, "Board transition");
                Some(event)
            }
            Err(error) => {
                tracing::error!("Board transition failed: {}", error);
                None
            }
        }
    }

    /// Registry handle for use outside the render pass.
    pub fn url_registry(&self) -> ObjectUrlRegistry {
        self.urls.peek().clone()
    }
}
