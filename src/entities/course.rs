//! Course entity - A subject taught by one teacher to one batch of students.

use serde::{Deserialize, Serialize};

/// A course offered to a batch.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Course {
    /// Unique identifier
    pub id: String,
    /// Human-readable name (e.g., "Mathematics")
    pub name: String,
    /// Short description shown in the course list
    pub description: String,
    /// Id of the teaching [`User`](super::User)
    pub teacher_id: String,
    /// Free-form batch label (e.g., "Batch A")
    pub batch: String,
    /// Ids of enrolled [`Student`](super::Student)s
    #[serde(default)]
    pub students: Vec<String>,
}

impl Course {
    /// Whether the given user id is this course's teacher.
    #[must_use]
    pub fn is_taught_by(&self, user_id: &str) -> bool {
        self.teacher_id == user_id
    }

    /// Number of enrolled students.
    #[must_use]
    pub fn enrolled_count(&self) -> usize {
        self.students.len()
    }
}
