//! Notebook record parsing.
//!
//! Raw structs mirror the JSON document with every field optional;
//! [`Notebook::from_json`] maps them into fully-populated values in one
//! place instead of defaulting field-by-field during rendering.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Error loading a notebook record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The input file could not be read.
    #[error("failed to read notebook file {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The input was not a valid notebook JSON document.
    #[error("failed to parse notebook JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw notebook document as it appears on disk.
///
/// Unknown fields (e.g. the unused `exam_score` on questions) are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawNotebook {
    student_id: String,
    name: String,
    questions: Vec<RawQuestion>,
}

/// Raw question entry with every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawQuestion {
    question_id: String,
    exam_name: Option<String>,
    created_at: String,
    last_reviewed_at: Option<String>,
    review_count: u32,
    error_reason: Option<String>,
    knowledge_points: Vec<String>,
    question_image_path: Option<String>,
    student_answer_image_path: Option<String>,
    student_answer_text: Option<String>,
    std_answer_image_path: Option<String>,
}

/// A student's notebook: identity plus the ordered question records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    /// Student identifier (may be empty in the source record).
    pub student_id: String,
    /// Student display name (may be empty in the source record).
    pub name: String,
    /// Question records in source order.
    pub questions: Vec<QuestionRecord>,
}

/// One missed question, fully populated.
///
/// `None` means the source record had no value (or an empty one) for that
/// field. If `student_answer_image` is present it takes precedence over
/// `student_answer_text` when rendering the student's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// Question identifier.
    pub question_id: String,
    /// Exam label; `None` places the record in the unclassified group.
    pub exam_name: Option<String>,
    /// Creation timestamp as recorded in the source.
    pub created_at: String,
    /// Last review timestamp, if the question was ever reviewed.
    pub last_reviewed_at: Option<String>,
    /// Number of completed reviews.
    pub review_count: u32,
    /// Explanation of why the question was missed.
    pub error_reason: Option<String>,
    /// Knowledge tags; empty entries are filtered at load.
    pub knowledge_points: Vec<String>,
    /// Image reference for the question itself.
    pub question_image: Option<String>,
    /// Image reference for the student's answer.
    pub student_answer_image: Option<String>,
    /// Free-text student answer, used when no answer image is present.
    pub student_answer_text: Option<String>,
    /// Image reference for the standard answer.
    pub std_answer_image: Option<String>,
}

/// Normalize an optional string: empty or whitespace-only becomes `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<RawQuestion> for QuestionRecord {
    fn from(raw: RawQuestion) -> Self {
        Self {
            question_id: raw.question_id,
            exam_name: non_empty(raw.exam_name).map(|s| s.trim().to_owned()),
            created_at: raw.created_at,
            last_reviewed_at: non_empty(raw.last_reviewed_at),
            review_count: raw.review_count,
            error_reason: non_empty(raw.error_reason),
            knowledge_points: raw
                .knowledge_points
                .into_iter()
                .filter(|kp| !kp.is_empty())
                .collect(),
            question_image: non_empty(raw.question_image_path),
            student_answer_image: non_empty(raw.student_answer_image_path),
            student_answer_text: non_empty(raw.student_answer_text),
            std_answer_image: non_empty(raw.std_answer_image_path),
        }
    }
}

impl Notebook {
    /// Load a notebook from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Io`] if the file cannot be read and
    /// [`RecordError::Parse`] if it is not a valid notebook document.
    /// Both are fatal: a broken input produces no output at all.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a notebook from a JSON string.
    ///
    /// Missing fields default (empty strings, zero counts); a document
    /// with the wrong shape (e.g. `questions` not an array) is an error.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Parse`] if the JSON is malformed or does not
    /// match the notebook structure.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let raw: RawNotebook = serde_json::from_str(json)?;
        let notebook = Self {
            student_id: raw.student_id,
            name: raw.name,
            questions: raw.questions.into_iter().map(Into::into).collect(),
        };
        tracing::debug!(
            student_id = %notebook.student_id,
            questions = notebook.questions.len(),
            "loaded notebook"
        );
        Ok(notebook)
    }
}
