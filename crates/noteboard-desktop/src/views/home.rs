//! Home view - the board

use dioxus::prelude::*;

use crate::components::{NoteForm, NoteList};
use crate::state::AppState;

/// Form on top, saved notes below
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "home-container",
            style: "
                min-height: 100vh;
                box-sizing: border-box;
                padding: 16px;
                background: {colors.bg_page};
            ",

            NoteForm {}
            NoteList {}
        }
    }
}
