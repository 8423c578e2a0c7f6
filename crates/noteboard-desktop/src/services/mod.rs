//! Application services
//!
//! Native dialogs for picking attachments and saving downloads.

mod download;
mod picker;

pub use download::download_attachment;
pub use picker::pick_attachment;
