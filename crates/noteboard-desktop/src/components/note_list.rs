//! Note list component

use dioxus::prelude::*;

use super::NoteCard;
use crate::state::AppState;

/// Saved notes in the order they were added
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let notes = state.board.read().notes().to_vec();

    rsx! {
        div {
            class: "note-list",
            style: "display: grid; gap: 12px;",

            for note in notes {
                {
                    let note_id = note.id;

                    rsx! {
                        NoteCard {
                            key: "{note_id}",
                            note,
                        }
                    }
                }
            }
        }
    }
}
