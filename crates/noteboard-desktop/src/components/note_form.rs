//! New-note form: text, one file, one image, save.

use dioxus::prelude::*;

use noteboard_core::{AttachmentSlot, BoardAction};

use super::attachment::{FileRow, ImagePreview};
use crate::services::pick_attachment;
use crate::state::AppState;

/// Draft editor bound to the board's draft state
#[component]
pub fn NoteForm() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let draft = state.board.read().draft().clone();
    let text = draft.text;
    let error = draft.error;
    let file = draft.file;
    let image = draft.image;

    let text_border = if error.is_some() {
        colors.error
    } else {
        colors.border
    };

    let pick = move |slot: AttachmentSlot| {
        spawn(async move {
            let picked = pick_attachment(slot).await;
            let action = match slot {
                AttachmentSlot::File => BoardAction::SetFile(picked),
                AttachmentSlot::Image => BoardAction::SetImage(picked),
            };
            state.dispatch(action);
        });
    };

    let picker_button_style = format!(
        "
            display: flex;
            align-items: center;
            gap: 4px;
            padding: 4px 12px;
            border-radius: 4px;
            border: 1px solid {};
            background: {};
            color: {};
            font-size: 12px;
        ",
        colors.border, colors.bg_input, colors.text_primary
    );

    rsx! {
        div {
            class: "note-form",
            style: "
                max-width: 448px;
                margin: 0 auto 16px auto;
                padding: 16px;
                border-radius: 8px;
                border: 1px solid {colors.border};
                background: {colors.bg_card};
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            ",

            h2 {
                style: "
                    margin: 0 0 12px 0;
                    font-size: 18px;
                    font-weight: 700;
                    text-align: center;
                    color: {colors.text_primary};
                ",
                "Nueva Nota"
            }

            textarea {
                class: "nb-textarea",
                rows: "3",
                placeholder: "Escribe tu nota aquí...",
                value: "{text}",
                style: "
                    width: 100%;
                    box-sizing: border-box;
                    padding: 8px;
                    margin-bottom: 8px;
                    font-size: 14px;
                    font-family: inherit;
                    border-radius: 4px;
                    border: 1px solid {text_border};
                    background: {colors.bg_input};
                    color: {colors.text_primary};
                    resize: vertical;
                ",
                oninput: move |evt: Event<FormData>| {
                    state.dispatch(BoardAction::SetText(evt.value()));
                },
            }

            if let Some(error) = error {
                p {
                    class: "note-form-error",
                    style: "
                        margin: 0 0 12px 0;
                        font-size: 12px;
                        text-align: center;
                        color: {colors.error};
                    ",
                    "{error}"
                }
            }

            div {
                style: "display: flex; gap: 8px; justify-content: center; margin-bottom: 12px;",

                button {
                    class: "nb-button",
                    style: "{picker_button_style}",
                    onclick: move |_| pick(AttachmentSlot::File),
                    span { "📄" }
                    span { "Archivo" }
                }

                button {
                    class: "nb-button",
                    style: "{picker_button_style}",
                    onclick: move |_| pick(AttachmentSlot::Image),
                    span { "🖼" }
                    span { "Imagen" }
                }
            }

            if let Some(file) = file {
                div {
                    style: "margin-bottom: 8px;",
                    FileRow { file, label_max_width: 180 }
                }
            }

            if let Some(image) = image {
                div {
                    style: "margin-bottom: 12px;",
                    ImagePreview { image, height: 128, alt: "Preview".to_string() }
                }
            }

            div {
                style: "display: flex; justify-content: center;",
                button {
                    class: "nb-button",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        padding: 4px 16px;
                        border-radius: 4px;
                        border: 1px solid {colors.border};
                        background: {colors.bg_input};
                        color: {colors.text_primary};
                        font-size: 14px;
                    ",
                    onclick: move |_| {
                        state.dispatch(BoardAction::Save);
                    },
                    span { "💾" }
                    span { "Guardar" }
                }
            }
        }
    }
}
