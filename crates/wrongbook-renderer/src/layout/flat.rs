//! Flat layout: stacked labeled sections, sorted by label.

use std::fmt::Write;

use wrongbook_record::ExamGroup;

use crate::card::{CardContext, render_card};
use crate::html::escape_html;

use super::GroupLayout;

/// Exam groups as stacked sections in lexicographic label order.
///
/// Because cards from different exams flow in one column, each card also
/// carries an exam label chip.
pub(crate) struct FlatLayout;

impl GroupLayout for FlatLayout {
    fn render(groups: &[ExamGroup<'_>], embed_images: bool, out: &mut String) {
        let ctx = CardContext {
            embed_images,
            show_exam_tag: true,
        };

        let mut ordered: Vec<&ExamGroup<'_>> = groups.iter().collect();
        ordered.sort_by(|a, b| a.label.cmp(b.label));

        for group in ordered {
            let _ = write!(
                out,
                "<div class=\"section-header\">{}</div>\n",
                escape_html(group.label),
            );
            for question in &group.questions {
                render_card(question, group.label, &ctx, out);
            }
        }
    }
}
