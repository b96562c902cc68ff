//! Resolution of image references into renderable outcomes.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

use crate::mime::mime_for_path;

/// Outcome of resolving one image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Reference the asset by its original path; the document supplies a
    /// client-side fallback for broken links.
    External(String),
    /// Asset bytes inlined as base64; verified present at render time.
    Embedded {
        /// MIME type guessed from the path extension.
        mime: &'static str,
        /// Base64-encoded file content.
        payload: String,
    },
    /// No usable asset; the label says why ("no image", "not found: …",
    /// "embed error").
    Placeholder(String),
}

/// Resolve an image reference.
///
/// Policy, in order:
/// 1. Empty or absent path → `Placeholder("no image")`. A normal outcome,
///    not an error.
/// 2. `embed` off → `External(path)`. No filesystem access in this mode;
///    broken links are the viewer's problem, handled by the document's
///    client-side fallback.
/// 3. `embed` on → open, read, and base64-encode the asset. An asset that
///    cannot be opened yields `Placeholder("not found: <basename>")`; a
///    failure while reading yields `Placeholder("embed error")`. Either
///    way the failure stops here — one bad asset never aborts the render.
///
/// Stateless and idempotent: resolving the same unchanged path twice under
/// the same mode yields byte-identical output.
#[must_use]
pub fn resolve(path: Option<&str>, embed: bool) -> Resolution {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return Resolution::Placeholder("no image".to_owned());
    };

    if !embed {
        return Resolution::External(path.to_owned());
    }

    // File handle is scoped to this call and released on every exit path.
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!(path, %err, "asset not found, substituting placeholder");
            return Resolution::Placeholder(format!("not found: {}", basename(path)));
        }
    };

    let mut data = Vec::new();
    if let Err(err) = file.read_to_end(&mut data) {
        tracing::warn!(path, %err, "failed to read asset, substituting placeholder");
        return Resolution::Placeholder("embed error".to_owned());
    }

    Resolution::Embedded {
        mime: mime_for_path(path),
        payload: BASE64_STANDARD.encode(&data),
    }
}

/// Final path component, for placeholder labels.
fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map_or_else(|| path.to_owned(), |name| name.to_string_lossy().into_owned())
}
