//! Main application component

use dioxus::prelude::*;

use noteboard_core::{NoteBoard, ObjectUrlRegistry};

use crate::config::app_config;
use crate::state::AppState;
use crate::theme::resolve_theme;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_hook(app_config);

    // State signals
    let board = use_signal(NoteBoard::new);
    let urls = use_signal(ObjectUrlRegistry::new);
    let theme = use_signal(|| resolve_theme(config.theme));
    let download_dir = use_signal(|| config.download_dir.clone());

    let state = use_context_provider(|| AppState {
        board,
        urls,
        theme,
        download_dir,
    });

    let current_theme = (state.theme)();
    let colors = current_theme.palette();
    let theme_attr = current_theme.as_attr();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/noteboard.css") }

        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                color: {colors.text_primary};
                background: {colors.bg_page};
                --nb-hover: {colors.bg_hover};
                --nb-muted: {colors.text_muted};
                --nb-danger-hover: {colors.danger_hover};
            ",
            Home {}
        }
    }
}
