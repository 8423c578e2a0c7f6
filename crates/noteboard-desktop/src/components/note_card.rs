//! Note card component

use dioxus::prelude::*;

use noteboard_core::{BoardAction, Note};

use super::attachment::{FileRow, ImagePreview};
use crate::state::AppState;

/// A saved note with its attachments and a delete button.
#[component]
pub fn NoteCard(note: Note) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let Note {
        id: note_id,
        text,
        file,
        image,
        ..
    } = note;

    rsx! {
        div {
            class: "note-card",
            style: "
                position: relative;
                padding: 12px;
                border-radius: 8px;
                border: 1px solid {colors.border};
                background: {colors.bg_card};
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                overflow: hidden;
            ",

            button {
                class: "nb-icon-button nb-delete-button",
                title: "Eliminar nota",
                style: "
                    position: absolute;
                    top: 4px;
                    right: 4px;
                    padding: 4px;
                    font-size: 14px;
                    color: {colors.text_primary};
                ",
                onclick: move |_| {
                    state.dispatch(BoardAction::Delete(note_id));
                },
                "🗑"
            }

            p {
                class: "note-text",
                style: "
                    margin: 0;
                    padding-right: 20px;
                    font-size: 14px;
                    white-space: pre-wrap;
                    word-break: break-word;
                    color: {colors.text_primary};
                ",
                "{text}"
            }

            if let Some(file) = file {
                div {
                    style: "margin-top: 8px;",
                    FileRow { file, label_max_width: 160 }
                }
            }

            if let Some(image) = image {
                div {
                    style: "margin-top: 8px;",
                    ImagePreview { image, height: 112, alt: "Imagen adjunta".to_string() }
                }
            }
        }
    }
}
