//! Grouping of question records by exam label.

use crate::QuestionRecord;

/// Group label for records without an exam name.
pub const UNCLASSIFIED: &str = "Unclassified";

/// Questions sharing one exam label, in source order.
#[derive(Debug, PartialEq, Eq)]
pub struct ExamGroup<'a> {
    /// Exam label, or [`UNCLASSIFIED`].
    pub label: &'a str,
    /// Records in first-seen order.
    pub questions: Vec<&'a QuestionRecord>,
}

/// Group questions by exam label, preserving first-seen order of both the
/// groups and the records within each group.
///
/// Display ordering beyond that (e.g. lexicographic sections) is the
/// layout's concern.
#[must_use]
pub fn group_by_exam(questions: &[QuestionRecord]) -> Vec<ExamGroup<'_>> {
    let mut groups: Vec<ExamGroup<'_>> = Vec::new();
    for question in questions {
        let label = question.exam_name.as_deref().unwrap_or(UNCLASSIFIED);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.questions.push(question),
            None => groups.push(ExamGroup {
                label,
                questions: vec![question],
            }),
        }
    }
    groups
}
