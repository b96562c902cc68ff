//! Image asset resolution and embedding.
//!
//! The resolver turns an image reference (a path string that may be empty
//! or absent) into a [`Resolution`]: an external link, an inline
//! base64-embedded payload, or a placeholder. A broken asset degrades that
//! one image to a placeholder — it never aborts the surrounding render.
//!
//! Each [`resolve`] call is independent and idempotent: no cache, no
//! internal state, and the asset file handle is scoped to the call.

mod mime;
mod placeholder;
mod resolver;

pub use mime::mime_for_path;
pub use placeholder::svg_data_uri;
pub use resolver::{Resolution, resolve};
