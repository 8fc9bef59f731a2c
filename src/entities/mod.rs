//! Entity module - Contains the plain data types that make up a school snapshot.
//! Entities are created once from seed data and never mutated afterwards; every
//! cross-entity reference is a string id resolved by the core layer.

pub mod attendance;
pub mod course;
pub mod performance;
pub mod student;
pub mod user;

pub use attendance::AttendanceRecord;
pub use course::Course;
pub use performance::PerformanceRecord;
pub use student::Student;
pub use user::{Role, User};
