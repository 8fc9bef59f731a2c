//! Attendance business logic - flattens every student's attendance marks into
//! enriched entries, filters them, and computes rates.
//!
//! All functions are framework-agnostic and total: an empty selection simply
//! produces a 0% rate.

use crate::{
    core::{School, ratio_percent, roster},
    entities::{AttendanceRecord, Student, User},
};
use chrono::NaiveDate;

/// Optional constraints on attendance entries. Every field that is set must
/// match exactly; unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    /// Calendar day of the mark
    pub date: Option<NaiveDate>,
    /// Course the mark was taken in
    pub course_id: Option<String>,
    /// Batch of the student the mark belongs to
    pub batch: Option<String>,
}

impl AttendanceFilter {
    /// Whether a mark owned by `student` passes every set constraint.
    #[must_use]
    pub fn matches(&self, record: &AttendanceRecord, student: &Student) -> bool {
        let matches_date = self.date.is_none_or(|date| record.date == date);
        let matches_course = self
            .course_id
            .as_deref()
            .is_none_or(|course_id| record.course_id == course_id);
        let matches_batch = self
            .batch
            .as_deref()
            .is_none_or(|batch| student.batch == batch);

        matches_date && matches_course && matches_batch
    }
}

/// An attendance mark joined with its student and (possibly missing) user.
#[derive(Debug, Clone, Copy)]
pub struct AttendanceEntry<'a> {
    /// The attendance mark
    pub record: &'a AttendanceRecord,
    /// The student the mark is embedded in
    pub student: &'a Student,
    /// The student's user, if it exists
    pub user: Option<&'a User>,
}

impl<'a> AttendanceEntry<'a> {
    /// The student's display name, or a placeholder when the user is missing.
    #[must_use]
    pub fn student_name(&self) -> &'a str {
        self.user
            .map_or(roster::UNKNOWN_STUDENT, |user| user.full_name.as_str())
    }
}

/// Present/absent counts for a selection of marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    /// Number of marks
    pub total: usize,
    /// Number of present marks
    pub present: usize,
    /// Number of absent marks
    pub absent: usize,
    /// Present marks as a whole-number percentage of all marks
    pub rate: u32,
}

/// Flattens every student's attendance into enriched entries and keeps the
/// ones matching `filter`, in student order then recorded order.
#[must_use]
pub fn attendance_records_for<'a>(school: &'a School, filter: &AttendanceFilter) -> Vec<AttendanceEntry<'a>> {
    school
        .students()
        .iter()
        .flat_map(|student| {
            let user = school.user(&student.user_id);
            student
                .attendance
                .iter()
                .filter(move |record| filter.matches(record, student))
                .map(move |record| AttendanceEntry {
                    record,
                    student,
                    user,
                })
        })
        .collect()
}

/// Percentage of `records` that are present, rounded; 0 for no records.
pub fn attendance_rate<'r, I>(records: I) -> u32
where
    I: IntoIterator<Item = &'r AttendanceRecord>,
{
    let (present, total) = records
        .into_iter()
        .fold((0, 0), |(present, total), record| {
            (present + usize::from(record.present), total + 1)
        });

    ratio_percent(present, total)
}

/// Counts and rate for a selection of entries.
#[must_use]
pub fn summarize(entries: &[AttendanceEntry<'_>]) -> AttendanceSummary {
    let total = entries.len();
    let present = entries.iter().filter(|entry| entry.record.present).count();

    AttendanceSummary {
        total,
        present,
        absent: total - present,
        rate: ratio_percent(present, total),
    }
}

/// Summary of every mark taken on `date`, regardless of any other filter.
#[must_use]
pub fn day_summary(school: &School, date: NaiveDate) -> AttendanceSummary {
    let filter = AttendanceFilter {
        date: Some(date),
        ..AttendanceFilter::default()
    };
    summarize(&attendance_records_for(school, &filter))
}

/// Attendance rate across every mark in the school.
#[must_use]
pub fn overall_rate(school: &School) -> u32 {
    attendance_rate(
        school
            .students()
            .iter()
            .flat_map(|student| student.attendance.iter()),
    )
}
