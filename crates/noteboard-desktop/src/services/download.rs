//! Download flow: save dialog or configured directory.

use std::path::PathBuf;

use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use noteboard_core::download::{begin_download, DirectorySink};
use noteboard_core::{Attachment, ObjectUrlRegistry};

/// Save `attachment` under its original name.
///
/// Absent attachments are ignored. With a download directory the bytes are
/// written straight there; otherwise a save dialog pre-filled with the file
/// name is shown. The object URL lives only until the write finishes or the
/// dialog is dismissed.
pub fn download_attachment(
    registry: &ObjectUrlRegistry,
    download_dir: Option<PathBuf>,
    attachment: Option<&Attachment>,
) {
    let Some(pending) = begin_download(registry, attachment) else {
        return;
    };

    if let Some(dir) = download_dir {
        let mut sink = DirectorySink::new(dir);
        if let Err(error) = pending.finish(&mut sink) {
            tracing::error!("Failed to save attachment: {}", error);
        }
        return;
    }

    spawn(async move {
        let Some(target) = AsyncFileDialog::new()
            .set_file_name(pending.file_name())
            .save_file()
            .await
        else {
            tracing::debug!(name = %pending.file_name(), "Download cancelled");
            return;
        };

        if let Err(error) = pending.write_to(target.path()) {
            tracing::error!("Failed to save attachment: {}", error);
        }
    });
}
