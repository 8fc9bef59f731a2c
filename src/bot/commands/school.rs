//! School view commands - dashboard, courses, students, attendance and
//! performance.
//!
//! Every command resolves the caller's session, checks read access to its
//! resource and replies with the rendered view.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            commands::{non_empty, resolve_course},
            handlers::autocomplete,
            reply, session_user, views,
        },
        core::{
            attendance::AttendanceFilter,
            performance::PerformanceFilter,
            permission::{self, Action, Resource},
        },
        errors::{Error, Result},
    };
    use chrono::NaiveDate;

    /// Your dashboard: statistics, quick actions and navigation.
    #[poise::command(slash_command, ephemeral)]
    pub async fn dashboard(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user = session_user(ctx).await?;
        permission::require(&user, Action::Read, Resource::Dashboard)?;

        let text = views::render_dashboard(&ctx.data().school, &user)?;
        reply(ctx, &text).await
    }

    /// Lists all courses with their teacher and enrolment.
    #[poise::command(slash_command, ephemeral)]
    pub async fn courses(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user = session_user(ctx).await?;
        permission::require(&user, Action::Read, Resource::Courses)?;

        let text = views::render_courses(&ctx.data().school, &user)?;
        reply(ctx, &text).await
    }

    /// Searches the student roster by name and batch.
    #[poise::command(slash_command, ephemeral)]
    pub async fn students(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Part of the student's name"] search: Option<String>,
        #[description = "Only this batch"]
        #[autocomplete = "autocomplete::autocomplete_batch"]
        batch: Option<String>,
    ) -> Result<()> {
        let user = session_user(ctx).await?;
        permission::require(&user, Action::Read, Resource::Students)?;

        let data = ctx.data();
        let search = non_empty(search).unwrap_or_default();
        let batch = non_empty(batch);
        let text = views::render_students(
            &data.school,
            &search,
            batch.as_deref(),
            data.display.page_size,
        )?;
        reply(ctx, &text).await
    }

    /// Attendance summary and records, optionally filtered.
    #[poise::command(slash_command, ephemeral)]
    pub async fn attendance(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Only this day (YYYY-MM-DD)"] date: Option<String>,
        #[description = "Only this course"]
        #[autocomplete = "autocomplete::autocomplete_course_name"]
        course: Option<String>,
        #[description = "Only this batch"]
        #[autocomplete = "autocomplete::autocomplete_batch"]
        batch: Option<String>,
    ) -> Result<()> {
        let user = session_user(ctx).await?;
        permission::require(&user, Action::Read, Resource::Attendance)?;

        let date = match non_empty(date) {
            Some(raw) => {
                let Ok(parsed) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") else {
                    return reply(ctx, "❌ Dates use the YYYY-MM-DD format, e.g. 2024-03-01.")
                        .await;
                };
                Some(parsed)
            }
            None => None,
        };

        let data = ctx.data();
        let filter = AttendanceFilter {
            date,
            course_id: resolve_course(&data.school, non_empty(course).as_deref())?,
            batch: non_empty(batch),
        };
        let today = chrono::Local::now().date_naive();

        let text =
            views::render_attendance(&data.school, &filter, today, data.display.page_size)?;
        reply(ctx, &text).await
    }

    /// Grades, summary statistics and the leaderboard, optionally filtered.
    #[poise::command(slash_command, ephemeral)]
    pub async fn performance(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Only this course"]
        #[autocomplete = "autocomplete::autocomplete_course_name"]
        course: Option<String>,
        #[description = "Only this batch"]
        #[autocomplete = "autocomplete::autocomplete_batch"]
        batch: Option<String>,
        #[description = "Only this assignment"]
        #[autocomplete = "autocomplete::autocomplete_assignment"]
        assignment: Option<String>,
    ) -> Result<()> {
        let user = session_user(ctx).await?;
        permission::require(&user, Action::Read, Resource::Performance)?;

        let data = ctx.data();
        let filter = PerformanceFilter {
            course_id: resolve_course(&data.school, non_empty(course).as_deref())?,
            batch: non_empty(batch),
            assignment: non_empty(assignment),
        };

        let text = views::render_performance(
            &data.school,
            &filter,
            data.display.page_size,
            data.display.leaderboard_size,
        )?;
        reply(ctx, &text).await
    }
}

// Re-export all commands
pub use inner::*;
