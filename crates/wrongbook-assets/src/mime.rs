//! MIME type lookup for image paths.

use std::ffi::OsStr;
use std::path::Path;

/// Guess a MIME type from a path's extension.
///
/// This is a deliberate heuristic — the file content is never sniffed, so
/// a PNG saved with a `.jpg` extension is reported as `image/jpeg`.
/// Unrecognized or missing extensions default to `image/jpeg`, which is
/// what browsers most commonly have to decode anyway.
#[must_use]
pub fn mime_for_path(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/jpeg",
    }
}
