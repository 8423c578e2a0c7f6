//! Media helpers shared by previews and downloads.
//!
//! MIME inference, inline data URIs for the webview, and size labels.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;

const KIB_BYTES: u64 = 1024;
const MIB_BYTES: u64 = KIB_BYTES * 1024;
const GIB_BYTES: u64 = MIB_BYTES * 1024;

/// File extensions offered by the image picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

/// Resolve the MIME type of a picked file.
///
/// A non-generic content type hint wins; otherwise the extension decides,
/// falling back to `application/octet-stream`.
pub fn infer_mime_type(content_type: Option<&str>, file_name: &str) -> String {
    if let Some(hint) = content_type.map(str::trim) {
        if !hint.is_empty() && !hint.eq_ignore_ascii_case("application/octet-stream") {
            return hint.to_ascii_lowercase();
        }
    }

    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Encode bytes as a `data:` URI the webview can render directly.
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let encoded = BASE64_STANDARD.encode(bytes);
    format!("data:{mime_type};base64,{encoded}")
}

/// Human-readable size label, e.g. `512 B` or `1.5 KB`.
pub fn format_size(size_bytes: usize) -> String {
    let bytes = u64::try_from(size_bytes).unwrap_or(u64::MAX);

    if bytes < KIB_BYTES {
        format!("{bytes} B")
    } else if bytes < MIB_BYTES {
        format_scaled_one_decimal(bytes, KIB_BYTES, "KB")
    } else if bytes < GIB_BYTES {
        format_scaled_one_decimal(bytes, MIB_BYTES, "MB")
    } else {
        format_scaled_one_decimal(bytes, GIB_BYTES, "GB")
    }
}

fn format_scaled_one_decimal(bytes: u64, unit: u64, suffix: &str) -> String {
    let mut whole = bytes / unit;
    let mut tenth = ((bytes % unit) * 10 + (unit / 2)) / unit;

    if tenth == 10 {
        whole += 1;
        tenth = 0;
    }

    format!("{whole}.{tenth} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_mime_type_prefers_specific_hint() {
        assert_eq!(infer_mime_type(Some("Image/PNG"), "scan.bin"), "image/png");
    }

    #[test]
    fn infer_mime_type_ignores_generic_hint() {
        assert_eq!(
            infer_mime_type(Some("application/octet-stream"), "photo.jpg"),
            "image/jpeg"
        );
        assert_eq!(infer_mime_type(Some("   "), "report.pdf"), "application/pdf");
    }

    #[test]
    fn infer_mime_type_falls_back_to_octet_stream() {
        assert_eq!(infer_mime_type(None, "README"), "application/octet-stream");
    }

    #[test]
    fn data_uri_embeds_base64_payload() {
        assert_eq!(data_uri("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn format_size_uses_binary_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn image_extensions_resolve_to_image_mime_types() {
        for ext in IMAGE_EXTENSIONS {
            let mime = infer_mime_type(None, &format!("picture.{ext}"));
            assert!(mime.starts_with("image/"), "{ext} -> {mime}");
        }
    }
}
