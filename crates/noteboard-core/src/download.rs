//! Save-as for attachments.
//!
//! A download acquires an object URL, hands it to a sink that writes the
//! bytes somewhere under the attachment's original name, and releases the URL
//! when the [`PendingDownload`] goes out of scope, whichever way that happens.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::Attachment;
use crate::object_url::{ObjectUrl, ObjectUrlRegistry};

const FALLBACK_FILE_NAME: &str = "download";
const MAX_NUMBERED_NAMES: u32 = 999;

/// Destination for a download.
pub trait DownloadSink {
    /// Persist the bytes behind `url` as `file_name`.
    fn save_as(&mut self, file_name: &str, url: &ObjectUrl) -> Result<()>;
}

/// An attachment whose object URL is live until this value is dropped.
#[derive(Debug)]
pub struct PendingDownload {
    url: ObjectUrl,
}

impl PendingDownload {
    /// Name to offer in the save dialog, verbatim from the attachment.
    pub fn file_name(&self) -> &str {
        &self.url.attachment().name
    }

    /// Write the attachment bytes to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.url.attachment().bytes)?;
        tracing::info!(
            name = %self.file_name(),
            path = %path.display(),
            "Attachment downloaded"
        );
        Ok(())
    }

    /// Hand the download to `sink`, then release the URL.
    pub fn finish(self, sink: &mut impl DownloadSink) -> Result<()> {
        sink.save_as(self.file_name(), &self.url)
    }
}

/// Start a download; `None` when there is nothing to download.
pub fn begin_download(
    registry: &ObjectUrlRegistry,
    attachment: Option<&Attachment>,
) -> Option<PendingDownload> {
    let attachment = attachment?;
    Some(PendingDownload {
        url: registry.create(attachment),
    })
}

/// Download `attachment` through `sink`.
///
/// Returns `Ok(false)` without touching the sink when the attachment is
/// absent. The object URL is revoked before this returns, on success or
/// failure.
pub fn download(
    registry: &ObjectUrlRegistry,
    attachment: Option<&Attachment>,
    sink: &mut impl DownloadSink,
) -> Result<bool> {
    let Some(pending) = begin_download(registry, attachment) else {
        return Ok(false);
    };
    pending.finish(sink)?;
    Ok(true)
}

/// Writes downloads straight into a directory, no dialog.
///
/// Existing files are never replaced: a clash gets a numbered name such as
/// `photo (1).jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Preferred path for a file named `file_name`.
    ///
    /// Only the final path component is kept so a crafted name cannot escape
    /// the directory.
    pub fn target_path(&self, file_name: &str) -> PathBuf {
        let safe_name = Path::new(file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(FALLBACK_FILE_NAME);
        self.dir.join(safe_name)
    }

    /// Create a file that did not exist before and write `bytes` into it.
    fn write_new(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let preferred = self.target_path(file_name);
        for attempt in 0..=MAX_NUMBERED_NAMES {
            let path = if attempt == 0 {
                preferred.clone()
            } else {
                numbered_path(&preferred, attempt)
            };

            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(error) if error.kind() == ErrorKind::AlreadyExists => continue,
                Err(error) => return Err(error.into()),
            };
            if let Err(error) = file.write_all(bytes) {
                drop(file);
                if let Err(cleanup) = std::fs::remove_file(&path) {
                    tracing::warn!(
                        path = %path.display(),
                        "Failed to remove partial download: {}",
                        cleanup
                    );
                }
                return Err(error.into());
            }
            return Ok(path);
        }

        Err(Error::Io(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free file name for {}", preferred.display()),
        )))
    }
}

/// `dir/photo.jpg` -> `dir/photo (n).jpg`
fn numbered_path(path: &Path, n: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(FALLBACK_FILE_NAME);
    let name = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem} ({n}).{ext}"),
        None => format!("{stem} ({n})"),
    };
    path.with_file_name(name)
}

impl DownloadSink for DirectorySink {
    fn save_as(&mut self, file_name: &str, url: &ObjectUrl) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.write_new(file_name, &url.attachment().bytes)?;
        tracing::info!(name = %file_name, path = %path.display(), "Attachment downloaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingSink {
        saved: Vec<(String, String, Vec<u8>)>,
        live_during_save: Vec<bool>,
    }

    impl DownloadSink for RecordingSink {
        fn save_as(&mut self, file_name: &str, url: &ObjectUrl) -> Result<()> {
            self.live_during_save.push(url.is_live());
            self.saved.push((
                file_name.to_string(),
                url.href().to_string(),
                url.attachment().bytes.to_vec(),
            ));
            Ok(())
        }
    }

    struct FailingSink;

    impl DownloadSink for FailingSink {
        fn save_as(&mut self, _file_name: &str, _url: &ObjectUrl) -> Result<()> {
            Err(Error::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn absent_attachment_is_a_noop() {
        let registry = ObjectUrlRegistry::new();
        let mut sink = RecordingSink::default();

        let downloaded = download(&registry, None, &mut sink).unwrap();

        assert!(!downloaded);
        assert!(sink.saved.is_empty());
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn download_uses_original_name_and_revokes_url() {
        let registry = ObjectUrlRegistry::new();
        let report = Attachment::new("report.pdf", b"%PDF-1.7".to_vec());
        let mut sink = RecordingSink::default();

        assert!(download(&registry, Some(&report), &mut sink).unwrap());

        let (name, href, bytes) = &sink.saved[0];
        assert_eq!(name, "report.pdf");
        assert_eq!(bytes, b"%PDF-1.7");
        assert_eq!(sink.live_during_save, vec![true]);
        assert_eq!(registry.resolve(href), None);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn failed_download_still_revokes_url() {
        let registry = ObjectUrlRegistry::new();
        let photo = Attachment::new("photo.jpg", vec![0xff, 0xd8]);

        let result = download(&registry, Some(&photo), &mut FailingSink);

        assert!(result.is_err());
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn pending_download_releases_on_drop() {
        let registry = ObjectUrlRegistry::new();
        let photo = Attachment::new("photo.jpg", vec![1, 2, 3]);

        let pending = begin_download(&registry, Some(&photo)).unwrap();
        assert_eq!(pending.file_name(), "photo.jpg");
        assert_eq!(registry.live_count(), 1);

        // Cancelled save dialog.
        drop(pending);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn write_to_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ObjectUrlRegistry::new();
        let photo = Attachment::new("photo.jpg", vec![9, 8, 7]);
        let path = dir.path().join("chosen-name.jpg");

        let pending = begin_download(&registry, Some(&photo)).unwrap();
        pending.write_to(&path).unwrap();
        drop(pending);

        assert_eq!(std::fs::read(&path).unwrap(), vec![9, 8, 7]);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn directory_sink_writes_under_original_name() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ObjectUrlRegistry::new();
        let report = Attachment::new("report.pdf", b"%PDF".to_vec());
        let mut sink = DirectorySink::new(dir.path().join("downloads"));

        download(&registry, Some(&report), &mut sink).unwrap();

        let written = std::fs::read(dir.path().join("downloads").join("report.pdf")).unwrap();
        assert_eq!(written, b"%PDF");
    }

    #[test]
    fn directory_sink_strips_path_components() {
        let sink = DirectorySink::new("/tmp/out");
        assert_eq!(
            sink.target_path("../../etc/passwd"),
            PathBuf::from("/tmp/out/passwd")
        );
        assert_eq!(sink.target_path(""), PathBuf::from("/tmp/out/download"));
        assert_eq!(sink.target_path(".."), PathBuf::from("/tmp/out/download"));
    }

    #[test]
    fn directory_sink_never_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("photo.jpg"), "USER-OWNED").unwrap();
        let registry = ObjectUrlRegistry::new();
        let from_a = Attachment::new("photo.jpg", b"note-A".to_vec());
        let from_b = Attachment::new("photo.jpg", b"note-B".to_vec());
        let mut sink = DirectorySink::new(dir.path());

        download(&registry, Some(&from_a), &mut sink).unwrap();
        download(&registry, Some(&from_b), &mut sink).unwrap();

        let mut entries: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        assert_eq!(entries, vec!["photo (1).jpg", "photo (2).jpg", "photo.jpg"]);

        let read = |name: &str| std::fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(read("photo.jpg"), "USER-OWNED");
        assert_eq!(read("photo (1).jpg"), "note-A");
        assert_eq!(read("photo (2).jpg"), "note-B");
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn numbered_path_keeps_extension() {
        assert_eq!(
            numbered_path(Path::new("/out/photo.jpg"), 1),
            PathBuf::from("/out/photo (1).jpg")
        );
        assert_eq!(
            numbered_path(Path::new("/out/README"), 3),
            PathBuf::from("/out/README (3)")
        );
        assert_eq!(
            numbered_path(Path::new("/out/archive.tar.gz"), 2),
            PathBuf::from("/out/archive.tar (2).gz")
        );
    }
}
