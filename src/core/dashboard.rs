//! Dashboard business logic - the statistic cards, quick actions and navigation
//! a user sees after logging in, each gated by the permission policy.

use crate::{
    core::{
        School, attendance, course,
        permission::{Action, Resource, has_permission},
    },
    entities::{Role, User},
};

/// Which statistic a dashboard card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Courses in the school
    TotalCourses,
    /// Students in the school
    TotalStudents,
    /// Courses the user teaches or is enrolled in
    MyCourses,
    /// Share of all attendance marks that are present
    AttendanceRate,
}

impl StatKind {
    /// Card title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TotalCourses => "Total Courses",
            Self::TotalStudents => "Total Students",
            Self::MyCourses => "My Courses",
            Self::AttendanceRate => "Attendance Rate",
        }
    }
}

/// One statistic card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStat {
    /// What the card measures
    pub kind: StatKind,
    /// Display value, already formatted
    pub value: String,
}

/// Shortcut buttons offered on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    /// Create a course
    AddCourse,
    /// Enrol a new student
    AddStudent,
    /// Record attendance for a day
    MarkAttendance,
    /// Enter assignment scores
    AddGrades,
}

impl QuickAction {
    /// Every quick action, in display order.
    pub const ALL: [Self; 4] = [
        Self::AddCourse,
        Self::AddStudent,
        Self::MarkAttendance,
        Self::AddGrades,
    ];

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddCourse => "Add New Course",
            Self::AddStudent => "Add New Student",
            Self::MarkAttendance => "Mark Attendance",
            Self::AddGrades => "Add Grades",
        }
    }

    /// The permission a user needs to see this action.
    #[must_use]
    pub const fn requires(self) -> (Action, Resource) {
        match self {
            Self::AddCourse => (Action::Create, Resource::Courses),
            Self::AddStudent => (Action::Create, Resource::Students),
            Self::MarkAttendance => (Action::Update, Resource::Attendance),
            Self::AddGrades => (Action::Create, Resource::Performance),
        }
    }
}

/// Statistic cards visible to `user`.
///
/// * Total Courses: needs read on courses.
/// * Total Students: needs read on students and is never shown to teachers.
/// * My Courses: teachers and students only.
/// * Attendance Rate: needs read on attendance; the rate across every mark.
#[must_use]
pub fn dashboard_stats(school: &School, user: &User) -> Vec<DashboardStat> {
    let mut stats = Vec::new();

    if has_permission(user, Action::Read, Resource::Courses) {
        stats.push(DashboardStat {
            kind: StatKind::TotalCourses,
            value: school.courses().len().to_string(),
        });
    }

    if has_permission(user, Action::Read, Resource::Students) && !user.has_role(Role::Teacher) {
        stats.push(DashboardStat {
            kind: StatKind::TotalStudents,
            value: school.students().len().to_string(),
        });
    }

    if let Some(count) = course::own_course_count(school, user) {
        stats.push(DashboardStat {
            kind: StatKind::MyCourses,
            value: count.to_string(),
        });
    }

    if has_permission(user, Action::Read, Resource::Attendance) {
        stats.push(DashboardStat {
            kind: StatKind::AttendanceRate,
            value: format!("{}%", attendance::overall_rate(school)),
        });
    }

    stats
}

/// Quick actions `user` may take.
#[must_use]
pub fn quick_actions(user: &User) -> Vec<QuickAction> {
    QuickAction::ALL
        .into_iter()
        .filter(|action| {
            let (needed, resource) = action.requires();
            has_permission(user, needed, resource)
        })
        .collect()
}

/// Screens `user` may open, in navigation order.
#[must_use]
pub fn navigation(user: &User) -> Vec<Resource> {
    Resource::ALL
        .into_iter()
        .filter(|resource| has_permission(user, Action::Read, *resource))
        .collect()
}
