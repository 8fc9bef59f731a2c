//! Roster business logic - joins students to their users and answers the
//! questions the student list asks.
//!
//! Missing references never fail: a student whose user cannot be found joins to
//! `None` and is displayed with a placeholder name.

use crate::{
    core::{School, attendance, performance},
    entities::{Student, User},
};

/// Display name for a student whose user record is missing.
pub const UNKNOWN_STUDENT: &str = "Unknown Student";
/// Display name for a course id that does not resolve.
pub const UNKNOWN_COURSE: &str = "Unknown Course";
/// Display name for a teacher id that does not resolve.
pub const UNKNOWN_TEACHER: &str = "Unknown";

/// A student joined with its (possibly missing) user.
#[derive(Debug, Clone, Copy)]
pub struct StudentProfile<'a> {
    /// The student record
    pub student: &'a Student,
    /// The owning user, if it exists
    pub user: Option<&'a User>,
}

impl<'a> StudentProfile<'a> {
    /// The user's full name, or [`UNKNOWN_STUDENT`].
    #[must_use]
    pub fn display_name(&self) -> &'a str {
        self.user.map_or(UNKNOWN_STUDENT, |user| user.full_name.as_str())
    }

    /// The user's email, if the user exists.
    #[must_use]
    pub fn email(&self) -> Option<&'a str> {
        self.user.map(|user| user.email.as_str())
    }

    /// Percentage of this student's attendance marks that are present.
    #[must_use]
    pub fn attendance_rate(&self) -> u32 {
        student_attendance_rate(self.student)
    }

    /// This student's average score percentage.
    #[must_use]
    pub fn average_score(&self) -> i64 {
        student_average_score(self.student)
    }
}

/// Left-joins a student with its user by `user_id`.
#[must_use]
pub fn join_student_with_user<'a>(school: &'a School, student: &'a Student) -> StudentProfile<'a> {
    StudentProfile {
        student,
        user: school.user(&student.user_id),
    }
}

/// Every student joined with its user, in seed order.
#[must_use]
pub fn profiles(school: &School) -> Vec<StudentProfile<'_>> {
    school
        .students()
        .iter()
        .map(|student| join_student_with_user(school, student))
        .collect()
}

/// Name of the course with the given id, or [`UNKNOWN_COURSE`].
#[must_use]
pub fn course_name<'a>(school: &'a School, course_id: &str) -> &'a str {
    school
        .course(course_id)
        .map_or(UNKNOWN_COURSE, |course| course.name.as_str())
}

/// Full name of the teacher with the given id, or [`UNKNOWN_TEACHER`].
#[must_use]
pub fn teacher_name<'a>(school: &'a School, teacher_id: &str) -> &'a str {
    school
        .user(teacher_id)
        .map_or(UNKNOWN_TEACHER, |teacher| teacher.full_name.as_str())
}

/// Searches the roster by name and batch.
///
/// `term` matches case-insensitively anywhere in the user's full name (an empty
/// term matches everyone with a user). `batch`, when given, must match exactly.
/// Students without a user never match.
#[must_use]
pub fn search_students<'a>(school: &'a School, term: &str, batch: Option<&str>) -> Vec<StudentProfile<'a>> {
    let term = term.to_lowercase();

    profiles(school)
        .into_iter()
        .filter(|profile| {
            let matches_search = profile
                .user
                .is_some_and(|user| user.full_name.to_lowercase().contains(&term));
            let matches_batch = batch.is_none_or(|batch| profile.student.batch == batch);
            matches_search && matches_batch
        })
        .collect()
}

/// Percentage of a student's attendance marks that are present, 0 with no marks.
#[must_use]
pub fn student_attendance_rate(student: &Student) -> u32 {
    attendance::attendance_rate(&student.attendance)
}

/// Mean of a student's per-assignment percentages, 0 with no records.
#[must_use]
pub fn student_average_score(student: &Student) -> i64 {
    performance::average_percentage(&student.performance)
}

/// Number of students in each batch, in first-seen batch order.
#[must_use]
pub fn batch_counts(school: &School) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for student in school.students() {
        match counts.iter_mut().find(|(batch, _)| *batch == student.batch) {
            Some((_, count)) => *count += 1,
            None => counts.push((student.batch.as_str(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_join_resolves_existing_user() {
        let school = sample_school();
        let student = &school.students()[0];
        let profile = join_student_with_user(&school, student);
        assert_eq!(profile.user.map(|u| u.id.as_str()), Some("4"));
        assert_eq!(profile.display_name(), "Alice Smith");
        assert_eq!(profile.email(), Some("alice@school.com"));
    }

    #[test]
    fn test_join_missing_user_yields_placeholder() {
        let school = sample_school();
        let orphan = &school.students()[3];
        let profile = join_student_with_user(&school, orphan);
        assert!(profile.user.is_none());
        assert_eq!(profile.display_name(), UNKNOWN_STUDENT);
        assert_eq!(profile.email(), None);
    }

    #[test]
    fn test_course_and_teacher_placeholders() {
        let school = sample_school();
        assert_eq!(course_name(&school, "1"), "Mathematics");
        assert_eq!(course_name(&school, "42"), UNKNOWN_COURSE);
        assert_eq!(teacher_name(&school, "3"), "Sarah Wilson");
        assert_eq!(teacher_name(&school, "42"), UNKNOWN_TEACHER);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let school = sample_school();
        let found = search_students(&school, "SMITH", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].display_name(), "Alice Smith");
    }

    #[test]
    fn test_search_combines_term_and_batch() {
        let school = sample_school();
        assert_eq!(search_students(&school, "", Some("Batch A")).len(), 2);
        assert_eq!(search_students(&school, "bob", Some("Batch A")).len(), 1);
        assert!(search_students(&school, "bob", Some("Batch B")).is_empty());
    }

    #[test]
    fn test_search_skips_students_without_user() {
        let school = sample_school();
        // Empty term matches every student with a user, but not the orphan.
        assert_eq!(search_students(&school, "", None).len(), 3);
        assert!(search_students(&school, "", Some("Batch C")).is_empty());
    }

    #[test]
    fn test_student_rates() {
        let school = sample_school();
        let students = school.students();
        assert_eq!(student_attendance_rate(&students[0]), 67);
        assert_eq!(student_average_score(&students[0]), 93);
        assert_eq!(student_attendance_rate(&students[3]), 0);
        assert_eq!(student_average_score(&students[3]), 0);
    }

    #[test]
    fn test_batch_counts() {
        let school = sample_school();
        assert_eq!(
            batch_counts(&school),
            vec![("Batch A", 2), ("Batch B", 1), ("Batch C", 1)]
        );
    }
}
