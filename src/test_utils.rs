//! Shared test utilities for `SchoolBuddy`.
//!
//! This module provides a small deterministic school and helpers for building
//! entities with sensible defaults.

use crate::{
    core::School,
    entities::{AttendanceRecord, Course, PerformanceRecord, Role, Student, User},
};
use chrono::NaiveDate;

/// Placeholder for users that never log in during a test; not a valid PHC string.
pub const UNUSED_PASSWORD_HASH: &str = "!unusable";

/// Builds a calendar day, panicking on invalid input (tests only).
#[must_use]
#[allow(clippy::expect_used)]
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Creates a test user with sensible defaults.
///
/// # Defaults
/// * `username`: `"user{id}"`
/// * `email`: `"user{id}@school.com"`
/// * `full_name`: `"User {id}"`
/// * `address`: None
#[must_use]
pub fn test_user(id: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        username: format!("user{id}"),
        email: format!("user{id}@school.com"),
        password_hash: UNUSED_PASSWORD_HASH.to_string(),
        role,
        full_name: format!("User {id}"),
        address: None,
    }
}

/// Creates a test user with a custom username and full name.
#[must_use]
pub fn named_user(id: &str, role: Role, username: &str, full_name: &str) -> User {
    User {
        username: username.to_string(),
        email: format!("{username}@school.com"),
        full_name: full_name.to_string(),
        ..test_user(id, role)
    }
}

/// Creates a test course.
#[must_use]
pub fn test_course(id: &str, name: &str, teacher_id: &str, batch: &str, students: &[&str]) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} fundamentals"),
        teacher_id: teacher_id.to_string(),
        batch: batch.to_string(),
        students: students.iter().map(ToString::to_string).collect(),
    }
}

/// Creates a test student with no history.
#[must_use]
pub fn test_student(id: &str, user_id: &str, batch: &str, courses: &[&str]) -> Student {
    Student {
        id: id.to_string(),
        user_id: user_id.to_string(),
        courses: courses.iter().map(ToString::to_string).collect(),
        batch: batch.to_string(),
        attendance: Vec::new(),
        performance: Vec::new(),
    }
}

/// Creates an attendance mark.
#[must_use]
pub fn mark(id: &str, student_id: &str, course_id: &str, date: NaiveDate, present: bool) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        student_id: student_id.to_string(),
        course_id: course_id.to_string(),
        date,
        present,
    }
}

/// Creates a performance record dated 2024-03-15.
#[must_use]
pub fn score(
    id: &str,
    student_id: &str,
    course_id: &str,
    assignment: &str,
    score: f64,
    max_score: f64,
) -> PerformanceRecord {
    PerformanceRecord {
        id: id.to_string(),
        student_id: student_id.to_string(),
        course_id: course_id.to_string(),
        assignment: assignment.to_string(),
        score,
        max_score,
        date: day(2024, 3, 15),
    }
}

/// The users of [`sample_school`]: one admin, two teachers, three students.
#[must_use]
pub fn sample_users() -> Vec<User> {
    vec![
        named_user("1", Role::Admin, "admin", "System Administrator"),
        named_user("2", Role::Teacher, "teacher1", "John Teacher"),
        named_user("3", Role::Teacher, "teacher2", "Sarah Wilson"),
        named_user("4", Role::Student, "alice", "Alice Smith"),
        named_user("5", Role::Student, "bob", "Bob Jones"),
        named_user("6", Role::Student, "cara", "Cara Lee"),
    ]
}

/// The students of [`sample_school`].
///
/// * `1` (Alice, Batch A): 2 of 3 present, scores 95% and 90%
/// * `2` (Bob, Batch A): 1 of 2 present, scores 80% and 80%
/// * `3` (Cara, Batch B): 1 of 1 present, score 58%
/// * `4` (Batch C): owned by a user id that does not exist, no history
#[must_use]
pub fn sample_students() -> Vec<Student> {
    let mut alice = test_student("1", "4", "Batch A", &["1", "2"]);
    alice.attendance = vec![
        mark("a1", "1", "1", day(2024, 3, 1), true),
        mark("a2", "1", "1", day(2024, 3, 2), false),
        mark("a3", "1", "2", day(2024, 3, 1), true),
    ];
    alice.performance = vec![
        score("p1", "1", "1", "Quiz 1", 95.0, 100.0),
        score("p2", "1", "2", "Midterm Exam", 45.0, 50.0),
    ];

    let mut bob = test_student("2", "5", "Batch A", &["1", "2"]);
    bob.attendance = vec![
        mark("b1", "2", "1", day(2024, 3, 1), false),
        mark("b2", "2", "2", day(2024, 3, 1), true),
    ];
    bob.performance = vec![
        score("q1", "2", "1", "Quiz 1", 80.0, 100.0),
        score("q2", "2", "1", "Project", 40.0, 50.0),
    ];

    let mut cara = test_student("3", "6", "Batch B", &["3"]);
    cara.attendance = vec![mark("c1", "3", "3", day(2024, 3, 1), true)];
    cara.performance = vec![score("r1", "3", "3", "Essay", 58.0, 100.0)];

    let orphan = test_student("4", "99", "Batch C", &[]);

    vec![alice, bob, cara, orphan]
}

/// The courses of [`sample_school`].
#[must_use]
pub fn sample_courses() -> Vec<Course> {
    vec![
        test_course("1", "Mathematics", "2", "Batch A", &["1", "2"]),
        test_course("2", "Science", "2", "Batch A", &["1", "2"]),
        test_course("3", "English Literature", "3", "Batch B", &["3"]),
    ]
}

/// A small school used across the core tests.
#[must_use]
pub fn sample_school() -> School {
    School::new(sample_users(), sample_courses(), sample_students())
}
