//! Mistake-notebook data model and JSON record loader.
//!
//! A notebook is a flat JSON record: student identity plus an ordered list
//! of missed exam questions. This crate parses that record into a
//! fully-populated in-memory model and groups questions by exam.
//!
//! Defaulting happens once, at load time: raw input fields may all be
//! missing, but a [`QuestionRecord`] always carries concrete values
//! (`None` for absent optionals, `0` for a missing review count, no empty
//! knowledge tags). Rendering code never has to guess about missing data.

mod group;
mod record;

pub use group::{ExamGroup, UNCLASSIFIED, group_by_exam};
pub use record::{Notebook, QuestionRecord, RecordError};
