//! Performance business logic - enriched score records, grade bands, summaries
//! and the student leaderboard.
//!
//! Every assignment counts with equal weight when averaging, regardless of its
//! `max_score`.

use crate::{
    core::{School, round_percent, roster},
    entities::{PerformanceRecord, Student, User},
};
use std::fmt;

/// Percentage at or above which a record counts as a high performance.
pub const HIGH_PERFORMER_THRESHOLD: i64 = 90;
/// Percentage below which a record counts as a low performance.
pub const LOW_PERFORMER_THRESHOLD: i64 = 60;

/// Optional constraints on performance records. Every field that is set must
/// match exactly; unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceFilter {
    /// Course the assignment was set in
    pub course_id: Option<String>,
    /// Batch of the student the record belongs to
    pub batch: Option<String>,
    /// Assignment label
    pub assignment: Option<String>,
}

impl PerformanceFilter {
    /// Whether a record owned by `student` passes every set constraint.
    #[must_use]
    pub fn matches(&self, record: &PerformanceRecord, student: &Student) -> bool {
        let matches_course = self
            .course_id
            .as_deref()
            .is_none_or(|course_id| record.course_id == course_id);
        let matches_batch = self
            .batch
            .as_deref()
            .is_none_or(|batch| student.batch == batch);
        let matches_assignment = self
            .assignment
            .as_deref()
            .is_none_or(|assignment| record.assignment == assignment);

        matches_course && matches_batch && matches_assignment
    }
}

/// Letter grade for a percentage. Each band includes its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    /// 90% and above
    A,
    /// 80% to 89%
    B,
    /// 70% to 79%
    C,
    /// 60% to 69%
    D,
    /// Below 60%
    F,
}

impl Grade {
    /// Bands a whole-number percentage: 90+ A, 80+ B, 70+ C, 60+ D, else F.
    #[must_use]
    pub const fn from_percentage(percentage: i64) -> Self {
        match percentage {
            90.. => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }

    /// The grade letter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// A performance record joined with its student, user and percentage.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceEntry<'a> {
    /// The performance record
    pub record: &'a PerformanceRecord,
    /// The student the record is embedded in
    pub student: &'a Student,
    /// The student's user, if it exists
    pub user: Option<&'a User>,
    /// `round(score / max_score * 100)`, 0 when `max_score` is zero
    pub percentage: i64,
}

impl<'a> PerformanceEntry<'a> {
    /// The student's display name, or a placeholder when the user is missing.
    #[must_use]
    pub fn student_name(&self) -> &'a str {
        self.user
            .map_or(roster::UNKNOWN_STUDENT, |user| user.full_name.as_str())
    }

    /// Letter grade of this entry.
    #[must_use]
    pub const fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }
}

/// Headline numbers for a selection of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerformanceSummary {
    /// Number of entries
    pub total: usize,
    /// Rounded mean of the entries' percentages
    pub average: i64,
    /// Entries at or above [`HIGH_PERFORMER_THRESHOLD`]
    pub high_performers: usize,
    /// Entries below [`LOW_PERFORMER_THRESHOLD`]
    pub low_performers: usize,
}

/// One row of the leaderboard.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardEntry<'a> {
    /// The ranked student
    pub student: &'a Student,
    /// The student's user, if it exists
    pub user: Option<&'a User>,
    /// Rounded mean of the matching records' percentages
    pub average_percentage: i64,
    /// Number of matching records
    pub assignment_count: usize,
}

impl<'a> LeaderboardEntry<'a> {
    /// The student's display name, or a placeholder when the user is missing.
    #[must_use]
    pub fn student_name(&self) -> &'a str {
        self.user
            .map_or(roster::UNKNOWN_STUDENT, |user| user.full_name.as_str())
    }
}

/// Flattens every student's performance into enriched entries and keeps the
/// ones matching `filter`, in student order then recorded order.
#[must_use]
pub fn performance_records_for<'a>(
    school: &'a School,
    filter: &PerformanceFilter,
) -> Vec<PerformanceEntry<'a>> {
    school
        .students()
        .iter()
        .flat_map(|student| {
            let user = school.user(&student.user_id);
            student
                .performance
                .iter()
                .filter(move |record| filter.matches(record, student))
                .map(move |record| PerformanceEntry {
                    record,
                    student,
                    user,
                    percentage: record.percentage(),
                })
        })
        .collect()
}

/// Rounded mean of the unrounded per-record percentages; 0 for no records.
pub fn average_percentage<'r, I>(records: I) -> i64
where
    I: IntoIterator<Item = &'r PerformanceRecord>,
{
    let (sum, count) = records
        .into_iter()
        .fold((0.0, 0_u32), |(sum, count), record| {
            (sum + record.raw_percentage(), count + 1)
        });

    if count == 0 {
        return 0;
    }

    round_percent(sum / f64::from(count))
}

/// Average, high and low performer counts for a selection of entries.
#[must_use]
pub fn summarize(entries: &[PerformanceEntry<'_>]) -> PerformanceSummary {
    let total = entries.len();
    if total == 0 {
        return PerformanceSummary::default();
    }

    // Summed as f64 so saturated percentages from huge scores cannot overflow.
    #[allow(clippy::cast_precision_loss)]
    let sum: f64 = entries.iter().map(|entry| entry.percentage as f64).sum();
    #[allow(clippy::cast_precision_loss)]
    let average = round_percent(sum / total as f64);

    PerformanceSummary {
        total,
        average,
        high_performers: entries
            .iter()
            .filter(|entry| entry.percentage >= HIGH_PERFORMER_THRESHOLD)
            .count(),
        low_performers: entries
            .iter()
            .filter(|entry| entry.percentage < LOW_PERFORMER_THRESHOLD)
            .count(),
    }
}

/// Ranks students by the mean percentage of their records matching `filter`.
///
/// Students with no matching record are left out. Ranking is by descending
/// average; students with equal averages keep their seed order.
#[must_use]
pub fn leaderboard<'a>(school: &'a School, filter: &PerformanceFilter) -> Vec<LeaderboardEntry<'a>> {
    let mut ranked: Vec<LeaderboardEntry<'a>> = school
        .students()
        .iter()
        .filter_map(|student| {
            let matching: Vec<&PerformanceRecord> = student
                .performance
                .iter()
                .filter(|record| filter.matches(record, student))
                .collect();

            if matching.is_empty() {
                return None;
            }

            Some(LeaderboardEntry {
                student,
                user: school.user(&student.user_id),
                average_percentage: average_percentage(matching.iter().copied()),
                assignment_count: matching.len(),
            })
        })
        .collect();

    // `sort_by` is stable, which keeps ties in seed order.
    ranked.sort_by(|a, b| b.average_percentage.cmp(&a.average_percentage));
    ranked
}

/// Distinct assignment labels across all students, in first-seen order.
#[must_use]
pub fn unique_assignments(school: &School) -> Vec<&str> {
    let mut assignments: Vec<&str> = Vec::new();
    for record in school
        .students()
        .iter()
        .flat_map(|student| student.performance.iter())
    {
        if !assignments.contains(&record.assignment.as_str()) {
            assignments.push(record.assignment.as_str());
        }
    }
    assignments
}
