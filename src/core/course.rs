//! Course business logic - the course table and per-user course lookups.

use crate::{
    core::{School, roster},
    entities::{Course, Role, User},
};

/// A course joined with its teacher's display name.
#[derive(Debug, Clone, Copy)]
pub struct CourseRow<'a> {
    /// The course
    pub course: &'a Course,
    /// Teacher's full name, or a placeholder when the teacher is missing
    pub teacher_name: &'a str,
    /// Number of enrolled students
    pub enrolled: usize,
}

/// Every course with its resolved teacher, in seed order.
#[must_use]
pub fn course_rows(school: &School) -> Vec<CourseRow<'_>> {
    school
        .courses()
        .iter()
        .map(|course| CourseRow {
            course,
            teacher_name: roster::teacher_name(school, &course.teacher_id),
            enrolled: course.enrolled_count(),
        })
        .collect()
}

/// Courses taught by the given teacher.
#[must_use]
pub fn courses_taught_by<'a>(school: &'a School, teacher_id: &str) -> Vec<&'a Course> {
    school
        .courses()
        .iter()
        .filter(|course| course.is_taught_by(teacher_id))
        .collect()
}

/// Course ids a student user is enrolled in, or empty when the user has no
/// student record.
#[must_use]
pub fn enrolled_course_ids<'a>(school: &'a School, user_id: &str) -> &'a [String] {
    school
        .student_for_user(user_id)
        .map(|student| student.courses.as_slice())
        .unwrap_or_default()
}

/// Number of courses belonging to a user: enrolled courses for students, taught
/// courses for teachers. `None` for admins, who own no courses.
#[must_use]
pub fn own_course_count(school: &School, user: &User) -> Option<usize> {
    match user.role {
        Role::Student => Some(enrolled_course_ids(school, &user.id).len()),
        Role::Teacher => Some(courses_taught_by(school, &user.id).len()),
        Role::Admin => None,
    }
}

/// Finds a course by id or by case-insensitive name.
#[must_use]
pub fn find_course<'a>(school: &'a School, query: &str) -> Option<&'a Course> {
    school.course(query).or_else(|| {
        school
            .courses()
            .iter()
            .find(|course| course.name.eq_ignore_ascii_case(query))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_course_rows_resolve_teacher() {
        let school = sample_school();
        let rows = course_rows(&school);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].teacher_name, "John Teacher");
        assert_eq!(rows[0].enrolled, 2);
        assert_eq!(rows[2].teacher_name, "Sarah Wilson");
    }

    #[test]
    fn test_course_rows_missing_teacher() {
        let courses = vec![test_course("9", "Ghost Studies", "404", "Batch A", &[])];
        let school = School::new(sample_users(), courses, Vec::new());
        assert_eq!(course_rows(&school)[0].teacher_name, roster::UNKNOWN_TEACHER);
    }

    #[test]
    fn test_own_course_count_by_role() {
        let school = sample_school();
        let teacher = test_user("2", Role::Teacher);
        let student = test_user("4", Role::Student);
        let admin = test_user("1", Role::Admin);
        assert_eq!(own_course_count(&school, &teacher), Some(2));
        assert_eq!(own_course_count(&school, &student), Some(2));
        assert_eq!(own_course_count(&school, &admin), None);
    }

    #[test]
    fn test_student_without_record_owns_no_courses() {
        let school = sample_school();
        let stray = test_user("77", Role::Student);
        assert_eq!(own_course_count(&school, &stray), Some(0));
        assert!(enrolled_course_ids(&school, "77").is_empty());
    }

    #[test]
    fn test_find_course_by_id_or_name() {
        let school = sample_school();
        assert_eq!(find_course(&school, "2").map(|c| c.id.as_str()), Some("2"));
        assert_eq!(
            find_course(&school, "mathematics").map(|c| c.id.as_str()),
            Some("1")
        );
        assert!(find_course(&school, "Alchemy").is_none());
    }
}
