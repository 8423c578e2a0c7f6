//! Attachment rows and image previews, shared by the form and the note cards.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use noteboard_core::media::format_size;
use noteboard_core::{Attachment, ObjectUrlSlot};

use crate::services::download_attachment;
use crate::state::AppState;

/// File name with size and a download button.
#[component]
pub fn FileRow(file: Attachment, label_max_width: u32) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let name = file.name.clone();
    let size = format_size(file.len());

    let on_download = move |_| {
        download_attachment(
            &state.url_registry(),
            state.download_dir.peek().clone(),
            Some(&file),
        );
    };

    rsx! {
        div {
            class: "attachment-file-row",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 8px;
                background: {colors.bg_input};
                padding: 4px 6px;
                border-radius: 4px;
                border: 1px solid {colors.border};
                font-size: 12px;
            ",

            div {
                style: "display: flex; align-items: center; gap: 6px; min-width: 0;",
                span { style: "color: {colors.text_primary};", "📄" }
                span {
                    title: "{name}",
                    style: "
                        color: {colors.text_primary};
                        max-width: {label_max_width}px;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{name}"
                }
                span { style: "color: {colors.text_muted}; white-space: nowrap;", "{size}" }
            }

            button {
                class: "nb-icon-button",
                title: "Descargar",
                style: "color: {colors.text_primary}; font-size: 14px; padding: 0 2px;",
                onclick: on_download,
                "⬇"
            }
        }
    }
}

/// Fixed-height image box with an overlaid download button.
///
/// Attachments without an `image/*` type fall back to a [`FileRow`].
///
/// The object URL behind the preview is held for as long as the component is
/// mounted and replaced when a different image is passed in.
#[component]
pub fn ImagePreview(image: Attachment, height: u32, alt: String) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let slot = use_hook(|| Rc::new(RefCell::new(ObjectUrlSlot::new())));

    // Nothing the webview can render inline; offer it as a plain file.
    if !image.is_image() {
        slot.borrow_mut().release();
        return rsx! {
            FileRow { file: image, label_max_width: 180 }
        };
    }

    let src = slot
        .borrow_mut()
        .acquire(&state.url_registry(), &image)
        .render_src()
        .to_string();

    let on_download = move |_| {
        download_attachment(
            &state.url_registry(),
            state.download_dir.peek().clone(),
            Some(&image),
        );
    };

    rsx! {
        div {
            class: "attachment-image-preview",
            style: "
                position: relative;
                width: 100%;
                height: {height}px;
                border-radius: 4px;
                overflow: hidden;
                border: 1px solid {colors.border};
                background: {colors.bg_input};
            ",

            img {
                src: "{src}",
                alt: "{alt}",
                style: "width: 100%; height: 100%; object-fit: cover; display: block;",
            }

            button {
                class: "nb-overlay-button",
                title: "Descargar",
                style: "
                    position: absolute;
                    bottom: 4px;
                    right: 4px;
                    width: 24px;
                    height: 24px;
                    border-radius: 9999px;
                    border: none;
                    cursor: pointer;
                    background: {colors.overlay};
                    color: {colors.text_primary};
                    font-size: 12px;
                ",
                onclick: on_download,
                "⬇"
            }
        }
    }
}
