//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions are only offered to logged-in users, so the school's course
//! names and batches are not shown to strangers.

use crate::{
    bot::BotData,
    core::performance,
    errors::Error,
};

/// Discord shows at most this many suggestions.
const MAX_SUGGESTIONS: usize = 25;

/// Keeps the candidates containing `partial` (case-insensitive), sorted and
/// capped at Discord's limit.
#[must_use]
pub fn matching<'a, I>(candidates: I, partial: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let partial_lower = partial.to_lowercase();

    let mut matching: Vec<String> = candidates
        .into_iter()
        .filter(|candidate| candidate.to_lowercase().contains(&partial_lower))
        .map(ToString::to_string)
        .collect();

    // Sort alphabetically for consistent UX
    matching.sort();
    matching.dedup();
    matching.truncate(MAX_SUGGESTIONS);
    matching
}

async fn is_logged_in(ctx: poise::Context<'_, BotData, Error>) -> bool {
    ctx.data()
        .sessions
        .current(ctx.author().id.get())
        .await
        .is_some()
}

/// Provides autocomplete suggestions for course names.
pub async fn autocomplete_course_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    if !is_logged_in(ctx).await {
        return Vec::new();
    }
    let school = &ctx.data().school;
    matching(school.courses().iter().map(|c| c.name.as_str()), partial)
}

/// Provides autocomplete suggestions for batch labels.
pub async fn autocomplete_batch(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    if !is_logged_in(ctx).await {
        return Vec::new();
    }
    matching(ctx.data().school.batches(), partial)
}

/// Provides autocomplete suggestions for assignment names.
pub async fn autocomplete_assignment(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    if !is_logged_in(ctx).await {
        return Vec::new();
    }
    matching(performance::unique_assignments(&ctx.data().school), partial)
}
