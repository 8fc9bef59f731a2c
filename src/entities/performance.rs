//! Performance entity - A scored assignment for a student in a course.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A graded piece of work. `score <= max_score` is expected but not enforced.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PerformanceRecord {
    /// Unique identifier
    pub id: String,
    /// Id of the [`Student`](super::Student) this score belongs to
    pub student_id: String,
    /// Id of the [`Course`](super::Course) the assignment was set in
    pub course_id: String,
    /// Free-text assignment label (e.g., "Quiz 1")
    pub assignment: String,
    /// Points earned
    pub score: f64,
    /// Points available
    pub max_score: f64,
    /// Day the work was graded
    pub date: NaiveDate,
}

impl PerformanceRecord {
    /// Unrounded `score / max_score * 100`, or 0 when `max_score` is zero.
    #[must_use]
    pub fn raw_percentage(&self) -> f64 {
        if self.max_score == 0.0 {
            return 0.0;
        }

        (self.score / self.max_score) * 100.0
    }

    /// The score as a whole-number percentage.
    #[must_use]
    pub fn percentage(&self) -> i64 {
        crate::core::round_percent(self.raw_percentage())
    }
}
