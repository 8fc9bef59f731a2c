//! Student entity - The academic side of a student user.
//!
//! A student is joined to its [`User`](super::User) by `user_id` so that staff users
//! never need attendance or performance fields.

use super::{AttendanceRecord, PerformanceRecord};
use serde::{Deserialize, Serialize};

/// A student with embedded attendance and performance history.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Student {
    /// Unique identifier
    pub id: String,
    /// Id of the owning [`User`](super::User)
    pub user_id: String,
    /// Ids of the courses this student is enrolled in
    #[serde(default)]
    pub courses: Vec<String>,
    /// Free-form batch label
    pub batch: String,
    /// Attendance history, in recorded order
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Performance history, in recorded order
    #[serde(default)]
    pub performance: Vec<PerformanceRecord>,
}

impl Student {
    /// Whether this student is enrolled in the given course.
    #[must_use]
    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.courses.iter().any(|id| id == course_id)
    }
}
