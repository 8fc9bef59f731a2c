//! Integrity checks - reports seed data that breaks the school's intended
//! invariants.
//!
//! The query layer tolerates every one of these (missing references become
//! placeholders), so the checks only ever report; loaders log the issues and
//! carry on.

use crate::{
    core::School,
    entities::{Role, Student},
};
use std::fmt;

/// A single violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// A student points at a user id that does not exist.
    StudentUserMissing { student_id: String, user_id: String },
    /// A student points at a user that is not a student.
    StudentUserWrongRole {
        student_id: String,
        user_id: String,
        role: Role,
    },
    /// A course points at a teacher id that does not exist.
    CourseTeacherMissing { course_id: String, teacher_id: String },
    /// A course points at a user that is not a teacher.
    CourseTeacherWrongRole {
        course_id: String,
        teacher_id: String,
        role: Role,
    },
    /// An attendance or performance record names a course that does not exist.
    UnknownCourse {
        student_id: String,
        record_id: String,
        course_id: String,
    },
    /// A record names a course the student is not enrolled in.
    NotEnrolled {
        student_id: String,
        record_id: String,
        course_id: String,
    },
    /// A performance record has a score or maximum that is infinite or NaN.
    NonFiniteScore { student_id: String, record_id: String },
    /// A performance record has a maximum score of zero.
    ZeroMaxScore { student_id: String, record_id: String },
    /// A performance record scores above its maximum.
    ScoreAboveMax { student_id: String, record_id: String },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StudentUserMissing {
                student_id,
                user_id,
            } => write!(f, "student {student_id} references missing user {user_id}"),
            Self::StudentUserWrongRole {
                student_id,
                user_id,
                role,
            } => write!(
                f,
                "student {student_id} references user {user_id} with role {role}"
            ),
            Self::CourseTeacherMissing {
                course_id,
                teacher_id,
            } => write!(f, "course {course_id} references missing teacher {teacher_id}"),
            Self::CourseTeacherWrongRole {
                course_id,
                teacher_id,
                role,
            } => write!(
                f,
                "course {course_id} references teacher {teacher_id} with role {role}"
            ),
            Self::UnknownCourse {
                student_id,
                record_id,
                course_id,
            } => write!(
                f,
                "record {record_id} of student {student_id} references missing course {course_id}"
            ),
            Self::NotEnrolled {
                student_id,
                record_id,
                course_id,
            } => write!(
                f,
                "record {record_id} of student {student_id} is for course {course_id} they are not enrolled in"
            ),
            Self::NonFiniteScore {
                student_id,
                record_id,
            } => write!(
                f,
                "performance record {record_id} of student {student_id} has a non-finite score or max score"
            ),
            Self::ZeroMaxScore {
                student_id,
                record_id,
            } => write!(
                f,
                "performance record {record_id} of student {student_id} has a max score of 0"
            ),
            Self::ScoreAboveMax {
                student_id,
                record_id,
            } => write!(
                f,
                "performance record {record_id} of student {student_id} scores above its max"
            ),
        }
    }
}

/// Checks every intended invariant of the snapshot and returns the violations,
/// in student/course seed order.
#[must_use]
pub fn check(school: &School) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for student in school.students() {
        match school.user(&student.user_id) {
            None => issues.push(IntegrityIssue::StudentUserMissing {
                student_id: student.id.clone(),
                user_id: student.user_id.clone(),
            }),
            Some(user) if user.role != Role::Student => {
                issues.push(IntegrityIssue::StudentUserWrongRole {
                    student_id: student.id.clone(),
                    user_id: user.id.clone(),
                    role: user.role,
                });
            }
            Some(_) => {}
        }

        check_records(school, student, &mut issues);
    }

    for course in school.courses() {
        match school.user(&course.teacher_id) {
            None => issues.push(IntegrityIssue::CourseTeacherMissing {
                course_id: course.id.clone(),
                teacher_id: course.teacher_id.clone(),
            }),
            Some(user) if user.role != Role::Teacher => {
                issues.push(IntegrityIssue::CourseTeacherWrongRole {
                    course_id: course.id.clone(),
                    teacher_id: user.id.clone(),
                    role: user.role,
                });
            }
            Some(_) => {}
        }
    }

    issues
}

fn check_records(school: &School, student: &Student, issues: &mut Vec<IntegrityIssue>) {
    let course_refs = student
        .attendance
        .iter()
        .map(|record| (&record.id, &record.course_id))
        .chain(
            student
                .performance
                .iter()
                .map(|record| (&record.id, &record.course_id)),
        );

    for (record_id, course_id) in course_refs {
        if school.course(course_id).is_none() {
            issues.push(IntegrityIssue::UnknownCourse {
                student_id: student.id.clone(),
                record_id: record_id.clone(),
                course_id: course_id.clone(),
            });
        } else if !student.is_enrolled_in(course_id) {
            issues.push(IntegrityIssue::NotEnrolled {
                student_id: student.id.clone(),
                record_id: record_id.clone(),
                course_id: course_id.clone(),
            });
        }
    }

    for record in &student.performance {
        if !record.score.is_finite() || !record.max_score.is_finite() {
            issues.push(IntegrityIssue::NonFiniteScore {
                student_id: student.id.clone(),
                record_id: record.id.clone(),
            });
        } else if record.max_score == 0.0 {
            issues.push(IntegrityIssue::ZeroMaxScore {
                student_id: student.id.clone(),
                record_id: record.id.clone(),
            });
        } else if record.score > record.max_score {
            issues.push(IntegrityIssue::ScoreAboveMax {
                student_id: student.id.clone(),
                record_id: record.id.clone(),
            });
        }
    }
}
