//! Inline SVG placeholder graphics.
//!
//! Placeholders are emitted as `data:image/svg+xml` URIs so the output
//! document stays self-contained even when an image is missing.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that must be percent-encoded inside a data URI that is
/// embedded in an HTML attribute.
const DATA_URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Build a placeholder graphic as an SVG data URI.
///
/// The label is rendered centered in a grey 300×200 box; distinct labels
/// ("no image", "not found: …", "embed error") stay distinguishable in
/// the final document.
#[must_use]
pub fn svg_data_uri(label: &str) -> String {
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 300 200"><rect width="300" height="200" fill="#f3f3f3"></rect><text x="150" y="100" text-anchor="middle" font-family="Arial" font-size="16" fill="#999">{}</text></svg>"##,
        escape_xml(label)
    );
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        utf8_percent_encode(&svg, DATA_URI)
    )
}

/// Escape XML special characters in the label text.
fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
