//! Core business logic - framework-agnostic permission checks and read-only
//! aggregation over a [`School`] snapshot.
//!
//! Nothing in here performs I/O or fails: missing references resolve to
//! placeholders and empty inputs produce zero values.

/// Attendance record queries and rates
pub mod attendance;
/// Course listings and teacher/student course lookups
pub mod course;
/// Dashboard statistics, quick actions and navigation
pub mod dashboard;
/// Data integrity checks for seed snapshots
pub mod integrity;
/// Role/action/resource permission policy
pub mod permission;
/// Performance record queries, grades and leaderboard
pub mod performance;
/// Text formatting helpers shared by every front end
pub mod report;
/// Student/user joins, placeholders and roster search
pub mod roster;
/// The in-memory school snapshot
pub mod school;

pub use school::School;

/// Rounds a percentage to the nearest whole number, halves rounding up.
#[must_use]
pub fn round_percent(value: f64) -> i64 {
    // `as` saturates out-of-range values and maps NaN to 0.
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    rounded
}

/// Share of `part` in `total` as a whole-number percentage, 0 when `total` is zero.
#[must_use]
pub fn ratio_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }

    // Counts come from in-memory vectors; the ratio is within [0, 100].
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let percent = ((part as f64 / total as f64) * 100.0).round() as u32;
    percent
}
