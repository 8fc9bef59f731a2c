//! The in-memory school snapshot every query runs against.

use crate::entities::{Course, Role, Student, User};

/// A read-only snapshot of users, courses and students.
///
/// Built once by the seed loader and shared behind an `Arc`; lookups are linear
/// scans, matching the small size of a single school's roster.
#[derive(Debug, Clone, Default)]
pub struct School {
    users: Vec<User>,
    courses: Vec<Course>,
    students: Vec<Student>,
}

impl School {
    /// Creates a snapshot from already-validated collections.
    #[must_use]
    pub const fn new(users: Vec<User>, courses: Vec<Course>, students: Vec<Student>) -> Self {
        Self {
            users,
            courses,
            students,
        }
    }

    /// All users, in seed order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All courses, in seed order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All students, in seed order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Finds a user by id.
    #[must_use]
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }

    /// Finds a user by exact username.
    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    /// Finds a course by id.
    #[must_use]
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == course_id)
    }

    /// Finds a student by id.
    #[must_use]
    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.id == student_id)
    }

    /// Finds the student record owned by a user.
    #[must_use]
    pub fn student_for_user(&self, user_id: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.user_id == user_id)
    }

    /// All users with the given role, in seed order.
    pub fn users_with_role(&self, role: Role) -> impl Iterator<Item = &User> {
        self.users.iter().filter(move |user| user.has_role(role))
    }

    /// Distinct batch labels across courses and students, in first-seen order.
    #[must_use]
    pub fn batches(&self) -> Vec<&str> {
        let mut batches: Vec<&str> = Vec::new();
        let labels = self
            .courses
            .iter()
            .map(|course| course.batch.as_str())
            .chain(self.students.iter().map(|student| student.batch.as_str()));

        for label in labels {
            if !batches.contains(&label) {
                batches.push(label);
            }
        }
        batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_lookups_resolve_by_id() {
        let school = sample_school();
        assert_eq!(school.user("2").map(|u| u.username.as_str()), Some("teacher1"));
        assert_eq!(
            school.course("3").map(|c| c.name.as_str()),
            Some("English Literature")
        );
        assert_eq!(school.student_for_user("5").map(|s| s.id.as_str()), Some("2"));
        assert!(school.user("404").is_none());
        assert!(school.student("404").is_none());
    }

    #[test]
    fn test_user_by_username_is_exact() {
        let school = sample_school();
        assert!(school.user_by_username("alice").is_some());
        assert!(school.user_by_username("Alice").is_none());
    }

    #[test]
    fn test_users_with_role() {
        let school = sample_school();
        let teachers: Vec<&str> = school
            .users_with_role(Role::Teacher)
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(teachers, vec!["2", "3"]);
    }

    #[test]
    fn test_batches_are_distinct_in_first_seen_order() {
        let school = sample_school();
        assert_eq!(school.batches(), vec!["Batch A", "Batch B", "Batch C"]);
    }
}
