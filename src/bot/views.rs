//! Plain-text rendering of the school views.
//!
//! Every function here is pure: it reads the snapshot and returns Markdown
//! text for a Discord message. Permission checks happen in the commands
//! before a view is rendered.

use crate::{
    config::generator,
    core::{
        School,
        attendance::{self, AttendanceFilter},
        course, dashboard,
        performance::{self, PerformanceFilter},
        permission::{Action, Resource, has_permission},
        report::{ScoreBand, attendance_badge, format_progress_bar, presence_label, rank_label},
        roster,
    },
    entities::User,
    errors::Result,
};
use chrono::NaiveDate;
use std::fmt::Write;

/// Summary of the available commands.
pub const HELP_TEXT: &str = "**SchoolBuddy Help**\n\
Here is a summary of all available commands.\n\n\
**Account**\n\
• `/login <username> <password>` - Signs you in.\n\
• `/logout` - Signs you out.\n\
• `/whoami` - Shows your profile.\n\n\
**School**\n\
• `/dashboard` - Statistics, quick actions and navigation.\n\
• `/courses` - Lists the courses with teacher and enrolment.\n\
• `/students [search] [batch]` - Searches the student roster.\n\
• `/attendance [date] [course] [batch]` - Attendance summary and records.\n\
• `/performance [course] [batch] [assignment]` - Grades and the leaderboard.\n\n\
**Utility**\n\
• `/ping` - Checks if the bot is responsive.\n\
• `/help` - Shows this help message.\n\n\
What you can see depends on your role.";

/// Help text, listing the demo logins when the school was generated.
pub fn help_text(demo_accounts: bool) -> Result<String> {
    let mut out = HELP_TEXT.to_string();
    if demo_accounts {
        writeln!(out, "\n\n**Demo accounts**")?;
        for (username, password) in generator::STAFF_LOGINS {
            writeln!(out, "• `{username}` / `{password}`")?;
        }
        write!(
            out,
            "• Students: their username / `{}`",
            generator::STUDENT_PASSWORD
        )?;
    }
    Ok(out)
}

fn write_more(out: &mut String, shown: usize, total: usize) -> Result<()> {
    if total > shown {
        writeln!(out, "_…and {} more_", total - shown)?;
    }
    Ok(())
}

/// Profile card for the logged-in user.
pub fn render_profile(user: &User) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "👤 **{}** (`{}`)", user.full_name, user.username)?;
    writeln!(out, "**Role:** {}", user.role.as_str().to_uppercase())?;
    writeln!(out, "**Email:** {}", user.email)?;
    writeln!(
        out,
        "**Address:** {}",
        user.address.as_deref().unwrap_or("Not provided")
    )?;
    Ok(out)
}

/// Dashboard: statistic cards, quick actions, navigation and profile.
pub fn render_dashboard(school: &School, user: &User) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "🏫 **Dashboard**")?;
    writeln!(out, "Welcome back, {}!\n", user.full_name)?;

    writeln!(out, "**Statistics**")?;
    for stat in dashboard::dashboard_stats(school, user) {
        writeln!(out, "• {}: **{}**", stat.kind.title(), stat.value)?;
    }

    let actions = dashboard::quick_actions(user);
    if !actions.is_empty() {
        writeln!(out, "\n**Quick Actions**")?;
        for action in actions {
            writeln!(out, "• {}", action.label())?;
        }
    }

    let screens: Vec<&str> = dashboard::navigation(user)
        .into_iter()
        .map(Resource::title)
        .collect();
    writeln!(out, "\n**Navigation:** {}\n", screens.join(" · "))?;

    out.push_str(&render_profile(user)?);
    Ok(out)
}

/// Course table with teacher, batch, enrolment and the actions `user` has.
pub fn render_courses(school: &School, user: &User) -> Result<String> {
    let rows = course::course_rows(school);
    let mut out = String::new();
    writeln!(out, "📚 **Courses** ({})", rows.len())?;

    if rows.is_empty() {
        writeln!(out, "No courses yet.")?;
        return Ok(out);
    }

    let managed: Vec<&str> = [Action::Update, Action::Delete]
        .into_iter()
        .filter(|action| has_permission(user, *action, Resource::Courses))
        .map(Action::as_str)
        .collect();

    for row in rows {
        writeln!(out, "\n**{}** ({})", row.course.name, row.course.batch)?;
        writeln!(out, "{}", row.course.description)?;
        writeln!(
            out,
            "Teacher: {} · Enrolled: {}",
            row.teacher_name, row.enrolled
        )?;
    }

    if has_permission(user, Action::Create, Resource::Courses) {
        writeln!(out, "\nYou can add new courses.")?;
    }
    if !managed.is_empty() {
        writeln!(out, "You can {} any course.", managed.join(" or "))?;
    }
    Ok(out)
}

/// Student roster: per-batch counts, then the matching students.
pub fn render_students(
    school: &School,
    term: &str,
    batch: Option<&str>,
    page_size: usize,
) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "🎓 **Students**")?;

    let counts: Vec<String> = roster::batch_counts(school)
        .into_iter()
        .map(|(name, count)| format!("{name}: {count}"))
        .collect();
    writeln!(out, "{}", counts.join(" · "))?;

    let matches = roster::search_students(school, term, batch);
    writeln!(out, "\n**{}** matching", matches.len())?;

    for profile in matches.iter().take(page_size) {
        let rate = profile.attendance_rate();
        let average = profile.average_score();
        writeln!(
            out,
            "• **{}** ({}) · {} · attendance {} {}% · average {} {}%",
            profile.display_name(),
            profile.student.batch,
            profile.email().unwrap_or("no email"),
            attendance_badge(rate),
            rate,
            ScoreBand::from_percentage(average).emoji(),
            average,
        )?;
    }
    write_more(&mut out, page_size.min(matches.len()), matches.len())?;
    Ok(out)
}

fn describe_filters(parts: &[(&str, Option<&str>)]) -> String {
    let active: Vec<String> = parts
        .iter()
        .filter_map(|(label, value)| value.map(|v| format!("{label} {v}")))
        .collect();
    if active.is_empty() {
        "all records".to_string()
    } else {
        active.join(", ")
    }
}

/// Attendance summary for `filter`, today's marks and the first records.
pub fn render_attendance(
    school: &School,
    filter: &AttendanceFilter,
    today: NaiveDate,
    page_size: usize,
) -> Result<String> {
    let date = filter.date.map(|d| d.format("%Y-%m-%d").to_string());
    let course = filter
        .course_id
        .as_deref()
        .map(|id| roster::course_name(school, id));
    let mut out = String::new();
    writeln!(
        out,
        "📅 **Attendance** ({})",
        describe_filters(&[
            ("date", date.as_deref()),
            ("course", course),
            ("batch", filter.batch.as_deref()),
        ])
    )?;

    let today_summary = attendance::day_summary(school, today);
    writeln!(
        out,
        "Today ({today}): {} of {} present",
        today_summary.present, today_summary.total
    )?;

    let entries = attendance::attendance_records_for(school, filter);
    let summary = attendance::summarize(&entries);
    writeln!(
        out,
        "Records: {} · Present: {} · Absent: {}",
        summary.total, summary.present, summary.absent
    )?;
    writeln!(
        out,
        "Rate: {} {}\n",
        attendance_badge(summary.rate),
        format_progress_bar(summary.rate, None)
    )?;

    if entries.is_empty() {
        writeln!(out, "No attendance records match.")?;
        return Ok(out);
    }

    for entry in entries.iter().take(page_size) {
        writeln!(
            out,
            "• {} · **{}** ({}) · {} · {}",
            entry.record.date,
            entry.student_name(),
            entry.student.batch,
            roster::course_name(school, &entry.record.course_id),
            presence_label(entry.record.present),
        )?;
    }
    write_more(&mut out, page_size.min(entries.len()), entries.len())?;
    Ok(out)
}

/// Performance summary, the first graded records and the leaderboard.
pub fn render_performance(
    school: &School,
    filter: &PerformanceFilter,
    page_size: usize,
    leaderboard_size: usize,
) -> Result<String> {
    let course = filter
        .course_id
        .as_deref()
        .map(|id| roster::course_name(school, id));
    let mut out = String::new();
    writeln!(
        out,
        "📈 **Performance** ({})",
        describe_filters(&[
            ("course", course),
            ("batch", filter.batch.as_deref()),
            ("assignment", filter.assignment.as_deref()),
        ])
    )?;

    let entries = performance::performance_records_for(school, filter);
    let summary = performance::summarize(&entries);
    writeln!(
        out,
        "Records: {} · Average: {}% · High performers (≥{}%): {} · Need attention (<{}%): {}\n",
        summary.total,
        summary.average,
        performance::HIGH_PERFORMER_THRESHOLD,
        summary.high_performers,
        performance::LOW_PERFORMER_THRESHOLD,
        summary.low_performers,
    )?;

    if entries.is_empty() {
        writeln!(out, "No performance records match.")?;
        return Ok(out);
    }

    for entry in entries.iter().take(page_size) {
        writeln!(
            out,
            "• **{}** · {} · {}: {}/{} ({}%) {} {}",
            entry.student_name(),
            roster::course_name(school, &entry.record.course_id),
            entry.record.assignment,
            entry.record.score,
            entry.record.max_score,
            entry.percentage,
            ScoreBand::from_percentage(entry.percentage).emoji(),
            entry.grade(),
        )?;
    }
    write_more(&mut out, page_size.min(entries.len()), entries.len())?;

    writeln!(out, "\n🏆 **Leaderboard**")?;
    for (index, entry) in performance::leaderboard(school, filter)
        .iter()
        .take(leaderboard_size)
        .enumerate()
    {
        writeln!(
            out,
            "{} **{}** ({}) · {}% over {} assignment{}",
            rank_label(index),
            entry.student_name(),
            entry.student.batch,
            entry.average_percentage,
            entry.assignment_count,
            if entry.assignment_count == 1 { "" } else { "s" },
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::Role, test_utils::*};

    #[test]
    fn test_help_lists_demo_accounts_for_generated_school() -> Result<()> {
        let text = help_text(true)?;
        assert!(text.starts_with(HELP_TEXT));
        assert!(text.contains("**Demo accounts**"));
        assert!(text.contains("• `admin` / `admin123`"));
        assert!(text.contains("• `teacher1` / `teacher123`"));
        assert!(text.contains("• `teacher2` / `teacher123`"));
        assert!(text.contains("their username / `student123`"));
        Ok(())
    }

    #[test]
    fn test_help_hides_demo_accounts_for_fixtures() -> Result<()> {
        let text = help_text(false)?;
        assert_eq!(text, HELP_TEXT);
        assert!(!text.contains("admin123"));
        Ok(())
    }

    #[test]
    fn test_profile_without_address() -> Result<()> {
        let user = named_user("2", Role::Teacher, "teacher1", "John Teacher");
        let text = render_profile(&user)?;
        assert!(text.contains("**John Teacher** (`teacher1`)"));
        assert!(text.contains("**Role:** TEACHER"));
        assert!(text.contains("Not provided"));
        Ok(())
    }

    #[test]
    fn test_dashboard_for_teacher() -> Result<()> {
        let school = sample_school();
        let teacher = named_user("2", Role::Teacher, "teacher1", "John Teacher");
        let text = render_dashboard(&school, &teacher)?;

        assert!(text.contains("Total Courses: **3**"));
        assert!(!text.contains("Total Students"));
        assert!(text.contains("My Courses: **2**"));
        assert!(text.contains("Attendance Rate: **67%**"));
        assert!(text.contains("Add New Student"));
        assert!(text.contains("**Navigation:** Dashboard · Courses · Attendance · Performance"));
        Ok(())
    }

    #[test]
    fn test_dashboard_for_student_has_no_quick_actions() -> Result<()> {
        let school = sample_school();
        let student = named_user("4", Role::Student, "alice", "Alice Smith");
        let text = render_dashboard(&school, &student)?;

        assert!(!text.contains("Quick Actions"));
        assert!(text.contains("My Courses: **2**"));
        assert!(text.contains("Students"));
        Ok(())
    }

    #[test]
    fn test_courses_lists_teachers_and_actions() -> Result<()> {
        let school = sample_school();
        let admin = test_user("1", Role::Admin);
        let text = render_courses(&school, &admin)?;

        assert!(text.starts_with("📚 **Courses** (3)"));
        assert!(text.contains("Teacher: Sarah Wilson · Enrolled: 1"));
        assert!(text.contains("You can update or delete any course."));

        let student = test_user("4", Role::Student);
        let text = render_courses(&school, &student)?;
        assert!(!text.contains("You can"));
        Ok(())
    }

    #[test]
    fn test_students_search_and_paging() -> Result<()> {
        let school = sample_school();

        let text = render_students(&school, "", Some("Batch A"), 1)?;
        assert!(text.contains("Batch A: 2 · Batch B: 1 · Batch C: 1"));
        assert!(text.contains("**2** matching"));
        assert!(text.contains("**Alice Smith**"));
        assert!(!text.contains("**Bob Jones**"));
        assert!(text.contains("…and 1 more"));

        let text = render_students(&school, "cara", None, 20)?;
        assert!(text.contains("**Cara Lee** (Batch B) · cara@school.com · attendance 🟢 100%"));
        Ok(())
    }

    #[test]
    fn test_attendance_view() -> Result<()> {
        let school = sample_school();
        let filter = AttendanceFilter {
            date: Some(day(2024, 3, 1)),
            ..AttendanceFilter::default()
        };
        let text = render_attendance(&school, &filter, day(2024, 3, 2), 20)?;

        assert!(text.contains("(date 2024-03-01)"));
        assert!(text.contains("Today (2024-03-02): 0 of 1 present"));
        assert!(text.contains("Records: 5 · Present: 4 · Absent: 1"));
        assert!(text.contains("[████████░░] 80%"));
        assert!(text.contains("**Bob Jones** (Batch A) · Mathematics · ❌ Absent"));
        Ok(())
    }

    #[test]
    fn test_attendance_view_no_matches() -> Result<()> {
        let school = sample_school();
        let filter = AttendanceFilter {
            batch: Some("Batch Z".to_string()),
            ..AttendanceFilter::default()
        };
        let text = render_attendance(&school, &filter, day(2024, 3, 1), 20)?;
        assert!(text.contains("No attendance records match."));
        assert!(text.contains("[░░░░░░░░░░] 0%"));
        Ok(())
    }

    #[test]
    fn test_performance_view() -> Result<()> {
        let school = sample_school();
        let text = render_performance(&school, &PerformanceFilter::default(), 20, 10)?;

        assert!(text.contains("(all records)"));
        assert!(text.contains("Records: 5 · Average: 81%"));
        assert!(text.contains("Midterm Exam: 45/50 (90%)"));
        assert!(text.contains("🥇 **Alice Smith** (Batch A) · 93% over 2 assignments"));
        assert!(text.contains("🥉 **Cara Lee** (Batch B) · 58% over 1 assignment\n"));
        Ok(())
    }

    #[test]
    fn test_performance_view_leaderboard_size() -> Result<()> {
        let school = sample_school();
        let filter = PerformanceFilter {
            assignment: Some("Quiz 1".to_string()),
            ..PerformanceFilter::default()
        };
        let text = render_performance(&school, &filter, 20, 1)?;

        assert!(text.contains("(assignment Quiz 1)"));
        assert!(text.contains("🥇 **Alice Smith**"));
        assert!(!text.contains("🥈"));
        Ok(())
    }
}
