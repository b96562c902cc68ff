//! Exam-group layout variants.
//!
//! The two layouts are alternate assemblers over the same grouped records:
//! tabbed panels (first-seen order) and flat labeled sections
//! (lexicographic order). Both render cards through the shared
//! [`render_card`](crate::card::render_card) path.

mod flat;
mod tabbed;

pub(crate) use flat::FlatLayout;
pub(crate) use tabbed::TabbedLayout;

use wrongbook_record::ExamGroup;

/// How exam groups are arranged in the output document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GroupingMode {
    /// Switchable panels, one per exam group, first-seen order.
    #[default]
    Tabbed,
    /// Stacked labeled sections, sorted lexicographically by label.
    Flat,
}

/// A layout renders all exam groups into the document body.
pub(crate) trait GroupLayout {
    fn render(groups: &[ExamGroup<'_>], embed_images: bool, out: &mut String);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_tabbed() {
        assert_eq!(GroupingMode::default(), GroupingMode::Tabbed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_mode_deserializes_from_lowercase() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            mode: GroupingMode,
        }
        let w: Wrapper = serde_json::from_str(r#"{"mode": "flat"}"#).unwrap();
        assert_eq!(w.mode, GroupingMode::Flat);
    }
}
