//! Native file picker.

use rfd::AsyncFileDialog;

use noteboard_core::media::{infer_mime_type, IMAGE_EXTENSIONS};
use noteboard_core::{Attachment, AttachmentSlot};

/// Open a picker for `slot` and read the chosen file.
///
/// Returns the picker selection: empty when the dialog was cancelled.
pub async fn pick_attachment(slot: AttachmentSlot) -> Vec<Attachment> {
    let mut dialog = AsyncFileDialog::new();
    if slot == AttachmentSlot::Image {
        dialog = dialog.add_filter("Imagen", IMAGE_EXTENSIONS);
    }

    let Some(file) = dialog.pick_file().await else {
        tracing::debug!(?slot, "Picker cancelled");
        return Vec::new();
    };

    let file_name = file.file_name();
    let bytes = file.read().await;
    let mime_type = infer_mime_type(None, &file_name);
    vec![Attachment::with_mime_type(file_name, mime_type, bytes)]
}
