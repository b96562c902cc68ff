//! Tabbed layout: one switchable panel per exam group.

use std::fmt::Write;

use wrongbook_record::ExamGroup;

use crate::card::{CardContext, render_card};
use crate::html::escape_html;

use super::GroupLayout;

/// Exam groups as tab panels in first-seen order, first panel active.
///
/// Tabs target their panels by index-based ids (`exam-panel-N`), never by
/// label text, so two groups whose labels render identically cannot
/// capture each other's clicks.
pub(crate) struct TabbedLayout;

impl GroupLayout for TabbedLayout {
    fn render(groups: &[ExamGroup<'_>], embed_images: bool, out: &mut String) {
        let ctx = CardContext {
            embed_images,
            show_exam_tag: false,
        };

        out.push_str("<div class=\"tabs\" role=\"tablist\">\n");
        for (idx, group) in groups.iter().enumerate() {
            let active = if idx == 0 { " active" } else { "" };
            let _ = write!(
                out,
                "<button class=\"tab{active}\" role=\"tab\" data-panel=\"exam-panel-{idx}\" aria-selected=\"{}\">{}</button>\n",
                idx == 0,
                escape_html(group.label),
            );
        }
        out.push_str("</div>\n");

        for (idx, group) in groups.iter().enumerate() {
            let active = if idx == 0 { " active" } else { "" };
            let _ = write!(
                out,
                "<div class=\"tab-content{active}\" id=\"exam-panel-{idx}\" role=\"tabpanel\">\n",
            );
            for question in &group.questions {
                render_card(question, group.label, &ctx, out);
            }
            out.push_str("</div>\n");
        }
    }
}
