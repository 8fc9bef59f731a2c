//! Attendance entity - One present/absent mark for a student in a course on a day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single attendance mark. Several marks for the same (student, course, date)
/// are allowed and each one counts.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    /// Unique identifier
    pub id: String,
    /// Id of the [`Student`](super::Student) this mark belongs to
    pub student_id: String,
    /// Id of the [`Course`](super::Course) attended
    pub course_id: String,
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Whether the student was present
    pub present: bool,
}
