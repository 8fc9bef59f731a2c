//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Login, logout and profile commands
pub mod auth;

/// School view commands (dashboard, courses, students, attendance, performance)
pub mod school;

/// General utility commands
pub mod general;

use crate::{
    bot::BotData,
    core::{School, course},
    errors::{Error, Result},
};

// Export commands
pub use auth::*;
pub use general::*;
pub use school::*;

/// Every command the bot registers.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![
        login(),
        logout(),
        whoami(),
        dashboard(),
        courses(),
        students(),
        attendance(),
        performance(),
        ping(),
        help(),
    ]
}

/// Resolves an optional course argument (id or name) to a course id.
pub(crate) fn resolve_course(school: &School, query: Option<&str>) -> Result<Option<String>> {
    query
        .map(|query| {
            course::find_course(school, query)
                .map(|course| course.id.clone())
                .ok_or_else(|| Error::UnknownValue {
                    kind: "course",
                    value: query.to_string(),
                })
        })
        .transpose()
}

/// Empty and whitespace-only arguments count as "not given".
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_school;

    #[test]
    fn test_resolve_course_by_name_or_id() -> Result<()> {
        let school = sample_school();
        assert_eq!(resolve_course(&school, None)?, None);
        assert_eq!(resolve_course(&school, Some("science"))?.as_deref(), Some("2"));
        assert_eq!(resolve_course(&school, Some("3"))?.as_deref(), Some("3"));
        assert!(matches!(
            resolve_course(&school, Some("Astronomy")),
            Err(Error::UnknownValue { kind: "course", .. })
        ));
        Ok(())
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some(" Batch A ".to_string())).as_deref(), Some("Batch A"));
    }

    #[test]
    fn test_all_commands_registered() {
        let names: Vec<String> = all().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "login",
                "logout",
                "whoami",
                "dashboard",
                "courses",
                "students",
                "attendance",
                "performance",
                "ping",
                "help"
            ]
        );
    }

    #[test]
    fn test_all_commands_are_slash_only() {
        for command in all() {
            assert!(command.slash_action.is_some(), "{} has no slash action", command.name);
            assert!(command.prefix_action.is_none(), "{} has a prefix action", command.name);
        }
    }
}
