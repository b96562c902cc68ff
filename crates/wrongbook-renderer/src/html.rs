//! HTML building blocks: escaping and the resolution-to-markup contract.

use wrongbook_assets::{Resolution, svg_data_uri};

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render a resolved image reference as an `<img>` tag.
///
/// - `External`: the path is the primary source, with an `onerror`
///   fallback to an inline placeholder labeled "image not found", so a
///   broken link degrades at view time instead of render time.
/// - `Embedded`: a `data:` URI is the sole source; the bytes were already
///   verified present when the asset was resolved.
/// - `Placeholder`: an inline placeholder graphic labeled with the reason.
#[must_use]
pub fn image_tag(resolution: &Resolution, alt: &str) -> String {
    match resolution {
        Resolution::External(path) => format!(
            r#"<img src="{}" alt="{}" onerror="this.onerror=null; this.src='{}';">"#,
            escape_html(path),
            escape_html(alt),
            svg_data_uri("image not found"),
        ),
        Resolution::Embedded { mime, payload } => format!(
            r#"<img src="data:{mime};base64,{payload}" alt="{}">"#,
            escape_html(alt),
        ),
        Resolution::Placeholder(reason) => format!(
            r#"<img src="{}" alt="{}">"#,
            svg_data_uri(reason),
            escape_html(alt),
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_external_tag_has_fallback() {
        let tag = image_tag(&Resolution::External("figs/q7.jpg".to_owned()), "Question");
        assert!(tag.starts_with(r#"<img src="figs/q7.jpg" alt="Question""#));
        assert!(tag.contains("onerror="));
        assert!(tag.contains("image%20not%20found"));
    }

    #[test]
    fn test_external_tag_escapes_path() {
        let tag = image_tag(&Resolution::External(r#"a"b.jpg"#.to_owned()), "x");
        assert!(tag.contains("a&quot;b.jpg"));
    }

    #[test]
    fn test_embedded_tag_is_data_uri_only() {
        let tag = image_tag(
            &Resolution::Embedded {
                mime: "image/png",
                payload: "AAAA".to_owned(),
            },
            "Question",
        );
        assert_eq!(tag, r#"<img src="data:image/png;base64,AAAA" alt="Question">"#);
    }

    #[test]
    fn test_placeholder_tag_carries_reason() {
        let tag = image_tag(
            &Resolution::Placeholder("not found: q7.jpg".to_owned()),
            "Question",
        );
        assert!(tag.contains("not%20found"));
        assert!(tag.contains("q7.jpg"));
        assert!(!tag.contains("onerror"));
    }
}
