use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EntityId;

/// A student's uploaded work for one assignment.
///
/// Starts ungraded (`grade == 0`, empty feedback, no `graded_at`). Grading
/// overwrites grade and feedback and may happen any number of times.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: EntityId,
    pub assignment_id: EntityId,
    pub student_id: EntityId,
    #[serde(default, skip_serializing)]
    pub file_data: Vec<u8>,
    pub file_name: String,
    pub grade: i32,
    pub feedback: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub graded_at: Option<DateTime<Utc>>,
}

impl Submission {
    pub fn new(
        id: EntityId,
        assignment_id: EntityId,
        student_id: EntityId,
        file_data: Vec<u8>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            assignment_id,
            student_id,
            file_data,
            file_name: file_name.into(),
            grade: 0,
            feedback: String::new(),
            submitted_at: Utc::now(),
            graded_at: None,
        }
    }

    pub fn is_graded(&self) -> bool { self.graded_at.is_some() }

    pub fn apply_grade(&mut self, grade: i32, feedback: impl Into<String>) {
        self.grade = grade;
        self.feedback = feedback.into();
        self.graded_at = Some(Utc::now());
    }
}
