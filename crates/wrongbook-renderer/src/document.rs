//! Whole-document assembly: chrome, stylesheet, and layout dispatch.

use std::fmt::Write;

use wrongbook_record::{Notebook, group_by_exam};

use crate::html::escape_html;
use crate::layout::{FlatLayout, GroupLayout, GroupingMode, TabbedLayout};

/// Embedded stylesheet shared by both layouts.
const STYLESHEET: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: "PingFang SC", "Microsoft YaHei", sans-serif;
    color: #333;
    background-color: #f5f5f5;
    padding: 20px;
    line-height: 1.6;
}
.container {
    max-width: 1000px;
    margin: 0 auto;
    background-color: white;
    box-shadow: 0 0 15px rgba(0, 0, 0, 0.1);
    border-radius: 8px;
    overflow: hidden;
}
header { background-color: #4285f4; color: white; padding: 20px; text-align: center; }
.student-info { display: flex; justify-content: space-between; margin-bottom: 10px; }
.questions-container { padding: 20px; }
.question-card { margin-bottom: 30px; border: 1px solid #e0e0e0; border-radius: 6px; overflow: hidden; }
.question-header {
    background-color: #f5f9ff;
    padding: 15px;
    border-bottom: 1px solid #e0e0e0;
    display: flex;
    justify-content: space-between;
    align-items: center;
    flex-wrap: wrap;
}
.question-body { padding: 15px; }
.question-content, .answer-content { margin-bottom: 15px; }
.image-container { margin: 10px 0; text-align: center; }
.image-container img { max-width: 100%; border: 1px solid #e0e0e0; border-radius: 4px; }
.error-reason { background-color: #ffebee; padding: 10px; border-radius: 4px; margin-top: 10px; }
.knowledge-points { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 15px; }
.knowledge-tag {
    background-color: #e3f2fd;
    color: #1976d2;
    padding: 4px 8px;
    border-radius: 4px;
    font-size: 0.85em;
}
.footer {
    text-align: center;
    padding: 20px;
    color: #757575;
    font-size: 0.9em;
    border-top: 1px solid #e0e0e0;
}
.review-info { display: flex; align-items: center; font-size: 0.9em; color: #757575; }
.review-badge {
    background-color: #ff5722;
    color: white;
    border-radius: 50%;
    width: 24px;
    height: 24px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-right: 8px;
    font-size: 0.8em;
}
.exam-info { color: #555; font-size: 0.9em; margin-bottom: 5px; }
.exam-tag {
    display: inline-block;
    background-color: #e0f7fa;
    color: #00838f;
    padding: 4px 10px;
    border-radius: 12px;
    font-size: 0.85em;
    margin-top: 5px;
    margin-right: 5px;
}
.section-header {
    background-color: #f1f8ff;
    padding: 10px 15px;
    margin: 20px 0 15px 0;
    border-left: 4px solid #4285f4;
    font-weight: bold;
}
.tabs { display: flex; background-color: #f1f8ff; border-bottom: 1px solid #ddd; }
.tab {
    padding: 10px 15px;
    cursor: pointer;
    border: none;
    background: none;
    font: inherit;
    border-bottom: 2px solid transparent;
}
.tab.active { border-bottom: 2px solid #4285f4; color: #4285f4; }
.tab-content { display: none; }
.tab-content.active { display: block; }
h3 { margin-top: 15px; margin-bottom: 8px; color: #333; }
"#;

/// Client-side panel switching for the tabbed layout.
///
/// Panels are looked up through each tab's `data-panel` id, so duplicate
/// or look-alike labels cannot select the wrong panel.
const TAB_SCRIPT: &str = r#"<script>
document.querySelectorAll('.tab').forEach((tab) => {
    tab.addEventListener('click', () => {
        document.querySelectorAll('.tab-content').forEach((panel) => {
            panel.classList.remove('active');
        });
        document.querySelectorAll('.tab').forEach((other) => {
            other.classList.remove('active');
            other.setAttribute('aria-selected', 'false');
        });
        document.getElementById(tab.dataset.panel).classList.add('active');
        tab.classList.add('active');
        tab.setAttribute('aria-selected', 'true');
    });
});
</script>
"#;

/// Settings for one render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Inline image bytes as base64 data URIs instead of linking by path.
    pub embed_images: bool,
    /// Layout variant for exam groups.
    pub grouping: GroupingMode,
    /// Preformatted generation timestamp shown in the header. Supplied by
    /// the caller so rendering itself stays deterministic.
    pub generated_at: String,
}

/// Render a notebook into a complete HTML document.
///
/// One pass: group the records, emit the chrome, and delegate the body to
/// the configured layout. Per-asset problems surface as placeholders in
/// the output, never as errors here.
#[must_use]
pub fn render_notebook(notebook: &Notebook, options: &RenderOptions) -> String {
    let groups = group_by_exam(&notebook.questions);
    let title = format!("{} - Mistake Notebook", notebook.name);

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = write!(html, "<title>{}</title>\n", escape_html(&title));
    html.push_str("<style>");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    let _ = write!(html, "<header>\n<h1>{}</h1>\n", escape_html(&title));
    html.push_str("<div class=\"student-info\">\n");
    let _ = write!(
        html,
        "<p>Student ID: {}</p>\n<p>Generated: {}</p>\n",
        escape_html(&notebook.student_id),
        escape_html(&options.generated_at),
    );
    html.push_str("</div>\n</header>\n");

    html.push_str("<div class=\"questions-container\">\n");
    match options.grouping {
        GroupingMode::Tabbed => TabbedLayout::render(&groups, options.embed_images, &mut html),
        GroupingMode::Flat => FlatLayout::render(&groups, options.embed_images, &mut html),
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"footer\">\n<p>Mistake notebook</p>\n</div>\n</div>\n");
    if options.grouping == GroupingMode::Tabbed {
        html.push_str(TAB_SCRIPT);
    }
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use wrongbook_record::Notebook;

    use super::*;

    fn sample() -> Notebook {
        Notebook::from_json(
            r#"{
                "student_id": "001",
                "name": "Alice",
                "questions": [
                    {"question_id": "1", "exam_name": "B"},
                    {"question_id": "2", "exam_name": "A"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_document_chrome() {
        let options = RenderOptions {
            generated_at: "2025-03-19 09:16:11".to_owned(),
            ..RenderOptions::default()
        };
        let html = render_notebook(&sample(), &options);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Alice - Mistake Notebook</title>"));
        assert!(html.contains("<p>Student ID: 001</p>"));
        assert!(html.contains("<p>Generated: 2025-03-19 09:16:11</p>"));
        assert!(html.contains("class=\"footer\""));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_tabbed_document_includes_script() {
        let html = render_notebook(&sample(), &RenderOptions::default());
        assert!(html.contains("role=\"tablist\""));
        assert!(html.contains("tab.dataset.panel"));
    }

    #[test]
    fn test_flat_document_has_no_script() {
        let options = RenderOptions {
            grouping: GroupingMode::Flat,
            ..RenderOptions::default()
        };
        let html = render_notebook(&sample(), &options);
        assert!(html.contains("section-header"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_student_name_is_escaped() {
        let notebook = Notebook::from_json(r#"{"name": "<Alice>"}"#).unwrap();
        let html = render_notebook(&notebook, &RenderOptions::default());
        assert!(html.contains("&lt;Alice&gt;"));
    }
}
