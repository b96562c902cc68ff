//! Question card rendering, shared by both layouts.

use std::fmt::Write;

use wrongbook_assets::resolve;
use wrongbook_record::QuestionRecord;

use crate::html::{escape_html, image_tag};

/// Shared rendering settings for question cards.
pub(crate) struct CardContext {
    /// Inline image bytes instead of linking by path.
    pub embed_images: bool,
    /// Show the exam label chip on each card (flat layout).
    pub show_exam_tag: bool,
}

/// Render one question card.
///
/// The resolver is invoked exactly once per image field — three times per
/// card — regardless of whether the field is populated, so resolution
/// policy stays in one place.
pub(crate) fn render_card(
    question: &QuestionRecord,
    exam_label: &str,
    ctx: &CardContext,
    out: &mut String,
) {
    let question_img = resolve(question.question_image.as_deref(), ctx.embed_images);
    let student_img = resolve(question.student_answer_image.as_deref(), ctx.embed_images);
    let std_img = resolve(question.std_answer_image.as_deref(), ctx.embed_images);

    out.push_str("<div class=\"question-card\">\n");

    // Header: identity on the left, review state on the right.
    out.push_str("<div class=\"question-header\">\n<div>\n");
    let _ = write!(
        out,
        "<div class=\"exam-info\">Question {} - added {}</div>\n",
        escape_html(&question.question_id),
        escape_html(&question.created_at),
    );
    if ctx.show_exam_tag {
        let _ = write!(
            out,
            "<span class=\"exam-tag\">{}</span>\n",
            escape_html(exam_label),
        );
    }
    out.push_str("</div>\n<div class=\"review-info\">\n");
    let _ = write!(
        out,
        "<div class=\"review-badge\">{}</div>\n",
        question.review_count,
    );
    let last_reviewed = question
        .last_reviewed_at
        .as_deref()
        .unwrap_or("not yet reviewed");
    let _ = write!(
        out,
        "<span>Reviewed {} times - last: {}</span>\n",
        question.review_count,
        escape_html(last_reviewed),
    );
    out.push_str("</div>\n</div>\n");

    // Body: question, student answer, standard answer.
    out.push_str("<div class=\"question-body\">\n<div class=\"question-content\">\n<h3>Question</h3>\n");
    let _ = write!(
        out,
        "<div class=\"image-container\">{}</div>\n",
        image_tag(&question_img, "Question"),
    );
    out.push_str("</div>\n<div class=\"answer-content\">\n<h3>My answer</h3>\n");

    // An answer image takes precedence over free text.
    if question.student_answer_image.is_some() {
        let _ = write!(
            out,
            "<div class=\"image-container\">{}</div>\n",
            image_tag(&student_img, "My answer"),
        );
    } else if let Some(text) = &question.student_answer_text {
        let _ = write!(out, "<p>{}</p>\n", escape_html(text));
    }

    out.push_str("<h3>Standard answer</h3>\n");
    let _ = write!(
        out,
        "<div class=\"image-container\">{}</div>\n",
        image_tag(&std_img, "Standard answer"),
    );

    if let Some(reason) = &question.error_reason {
        let _ = write!(
            out,
            "<div class=\"error-reason\">\n<h3>Why I got it wrong</h3>\n<p>{}</p>\n</div>\n",
            escape_html(reason),
        );
    }

    if !question.knowledge_points.is_empty() {
        out.push_str("<div class=\"knowledge-points\">\n<h3>Knowledge points:</h3>\n");
        for tag in &question.knowledge_points {
            let _ = write!(
                out,
                "<span class=\"knowledge-tag\">{}</span>\n",
                escape_html(tag),
            );
        }
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n</div>\n</div>\n");
}

#[cfg(test)]
mod tests {
    use wrongbook_record::Notebook;

    use super::*;

    fn card_for(question_json: &str) -> String {
        let json = format!(r#"{{"questions": [{question_json}]}}"#);
        let notebook = Notebook::from_json(&json).unwrap();
        let ctx = CardContext {
            embed_images: false,
            show_exam_tag: false,
        };
        let mut out = String::new();
        render_card(&notebook.questions[0], "Exam A", &ctx, &mut out);
        out
    }

    #[test]
    fn test_card_has_three_image_sections() {
        let out = card_for(r#"{"question_id": "1", "question_image_path": "q.jpg"}"#);
        assert!(out.contains("<h3>Question</h3>"));
        assert!(out.contains("<h3>My answer</h3>"));
        assert!(out.contains("<h3>Standard answer</h3>"));
        // Populated field links externally, absent ones get placeholders.
        assert!(out.contains(r#"src="q.jpg""#));
        assert!(out.contains("no%20image"));
    }

    #[test]
    fn test_answer_image_takes_precedence_over_text() {
        let out = card_for(
            r#"{"student_answer_image_path": "ans.jpg", "student_answer_text": "B,C,D"}"#,
        );
        assert!(out.contains(r#"src="ans.jpg""#));
        assert!(!out.contains("<p>B,C,D</p>"));
    }

    #[test]
    fn test_answer_text_used_when_no_image() {
        let out = card_for(r#"{"student_answer_text": "B,C,D"}"#);
        assert!(out.contains("<p>B,C,D</p>"));
    }

    #[test]
    fn test_error_reason_skipped_when_absent() {
        let out = card_for(r#"{"question_id": "1"}"#);
        assert!(!out.contains("error-reason"));

        let out = card_for(r#"{"error_reason": "rushed it"}"#);
        assert!(out.contains("error-reason"));
        assert!(out.contains("<p>rushed it</p>"));
    }

    #[test]
    fn test_filtered_tags_render_once_each() {
        let out = card_for(r#"{"knowledge_points": ["", "momentum", ""]}"#);
        assert_eq!(out.matches("knowledge-tag").count(), 1);
        assert!(out.contains(">momentum</span>"));
    }

    #[test]
    fn test_no_tags_no_section() {
        let out = card_for(r#"{"knowledge_points": ["", ""]}"#);
        assert!(!out.contains("knowledge-points"));
    }

    #[test]
    fn test_unreviewed_question_says_so() {
        let out = card_for(r#"{"review_count": 0}"#);
        assert!(out.contains("Reviewed 0 times - last: not yet reviewed"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let out = card_for(r#"{"error_reason": "<script>alert(1)</script>"}"#);
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_exam_tag_only_when_requested() {
        let json = r#"{"questions": [{"question_id": "1"}]}"#;
        let notebook = Notebook::from_json(json).unwrap();

        let mut with_tag = String::new();
        render_card(
            &notebook.questions[0],
            "Exam A",
            &CardContext {
                embed_images: false,
                show_exam_tag: true,
            },
            &mut with_tag,
        );
        assert!(with_tag.contains(r#"<span class="exam-tag">Exam A</span>"#));

        let mut without_tag = String::new();
        render_card(
            &notebook.questions[0],
            "Exam A",
            &CardContext {
                embed_images: false,
                show_exam_tag: false,
            },
            &mut without_tag,
        );
        assert!(!without_tag.contains("exam-tag"));
    }
}
