//! Report formatting helpers.
//!
//! This module provides the small text building blocks every view uses: progress
//! bars, colour bands for scores and attendance, leaderboard medals and message
//! truncation. All functions are framework-agnostic and return plain strings.

/// Discord rejects messages longer than this many characters.
pub const MESSAGE_LIMIT: usize = 2000;

/// Colour band of a score percentage, used for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 90% and above
    Success,
    /// 75% to 89%
    Primary,
    /// 60% to 74%
    Warning,
    /// Below 60%
    Danger,
}

impl ScoreBand {
    /// Bands a score percentage.
    #[must_use]
    pub const fn from_percentage(percentage: i64) -> Self {
        match percentage {
            90.. => Self::Success,
            75..=89 => Self::Primary,
            60..=74 => Self::Warning,
            _ => Self::Danger,
        }
    }

    /// Badge emoji for the band.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Success => "🟢",
            Self::Primary => "🔵",
            Self::Warning => "🟡",
            Self::Danger => "🔴",
        }
    }
}

/// Badge emoji for an attendance rate: 90%+ good, 75%+ fair, below that poor.
#[must_use]
pub const fn attendance_badge(rate: u32) -> &'static str {
    match rate {
        90.. => "🟢",
        75..=89 => "🟡",
        _ => "🔴",
    }
}

/// Present/absent label for an attendance mark.
#[must_use]
pub const fn presence_label(present: bool) -> &'static str {
    if present { "✅ Present" } else { "❌ Absent" }
}

/// Leaderboard position label: medals for the podium, `#n` after that.
#[must_use]
pub fn rank_label(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("#{}", n + 1),
    }
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80%`
///
/// # Arguments
/// * `percent` - Percentage to draw (0-100, clamped for the bar only)
/// * `bar_length` - Length of the progress bar in characters (default 10)
#[must_use]
pub fn format_progress_bar(percent: u32, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = percent.min(100) as usize;

    let filled = (clamped * length + 50) / 100;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {percent}%")
}

/// Cuts `text` to at most `limit` characters, ending with a marker when cut.
#[must_use]
pub fn truncate_message(text: &str, limit: usize) -> String {
    const MARKER: &str = "\n…";

    if text.chars().count() <= limit {
        return text.to_string();
    }

    let keep = limit.saturating_sub(MARKER.chars().count());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_percentage(90), ScoreBand::Success);
        assert_eq!(ScoreBand::from_percentage(89), ScoreBand::Primary);
        assert_eq!(ScoreBand::from_percentage(75), ScoreBand::Primary);
        assert_eq!(ScoreBand::from_percentage(74), ScoreBand::Warning);
        assert_eq!(ScoreBand::from_percentage(60), ScoreBand::Warning);
        assert_eq!(ScoreBand::from_percentage(59), ScoreBand::Danger);
    }

    #[test]
    fn test_attendance_badge() {
        assert_eq!(attendance_badge(90), "🟢");
        assert_eq!(attendance_badge(75), "🟡");
        assert_eq!(attendance_badge(74), "🔴");
    }

    #[test]
    fn test_rank_label() {
        assert_eq!(rank_label(0), "🥇");
        assert_eq!(rank_label(2), "🥉");
        assert_eq!(rank_label(3), "#4");
    }

    #[test]
    fn test_format_progress_bar_full() {
        let bar = format_progress_bar(100, Some(10));
        assert_eq!(bar, "[██████████] 100%");
    }

    #[test]
    fn test_format_progress_bar_partial() {
        assert_eq!(format_progress_bar(67, Some(10)), "[███████░░░] 67%");
        assert_eq!(format_progress_bar(50, None), "[█████░░░░░] 50%");
    }

    #[test]
    fn test_format_progress_bar_zero() {
        let bar = format_progress_bar(0, Some(10));
        assert_eq!(bar, "[░░░░░░░░░░] 0%");
    }

    #[test]
    fn test_truncate_message_short_text_unchanged() {
        assert_eq!(truncate_message("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_message_respects_limit() {
        let long = "é".repeat(50);
        let cut = truncate_message(&long, 20);
        assert_eq!(cut.chars().count(), 20);
        assert!(cut.ends_with('…'));
    }
}
