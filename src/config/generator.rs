//! Deterministic demo data.
//!
//! Produces the same school for the same seed: one administrator, two
//! teachers, `student_count` students spread over three batches, six courses
//! (two per batch) and a year of attendance and grades for every student.

use crate::{
    config::seed::{SeedData, UserSeed},
    entities::{AttendanceRecord, Course, PerformanceRecord, Role, Student},
};
use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng};

const FIRST_NAMES: [&str; 50] = [
    "Alex", "Emma", "Noah", "Olivia", "Liam", "Sophia", "Ethan", "Isabella", "Mason", "Mia",
    "Jacob", "Charlotte", "William", "Amelia", "James", "Harper", "Benjamin", "Evelyn", "Lucas",
    "Abigail", "Henry", "Emily", "Alexander", "Elizabeth", "Michael", "Sofia", "Daniel", "Avery",
    "Matthew", "Ella", "Jackson", "Madison", "Sebastian", "Scarlett", "Aiden", "Victoria",
    "Samuel", "Aria", "David", "Grace", "Joseph", "Chloe", "Carter", "Camila", "Owen", "Penelope",
    "Wyatt", "Riley", "John", "Layla",
];

const LAST_NAMES: [&str; 50] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts",
];

const STREETS: [&str; 10] = [
    "Main St", "Oak Ave", "Pine Rd", "Elm Dr", "Maple Ln", "Cedar Blvd", "Birch Way",
    "Willow Ct", "Spruce St", "Ash Ave",
];

const ASSIGNMENTS: [&str; 8] = [
    "Quiz 1",
    "Midterm Exam",
    "Project",
    "Final Exam",
    "Homework 1",
    "Homework 2",
    "Lab Report",
    "Essay",
];

/// Batch labels, each with the two courses it takes.
const BATCHES: [(&str, [&str; 2]); 3] = [
    ("Batch A", ["1", "2"]),
    ("Batch B", ["3", "4"]),
    ("Batch C", ["5", "6"]),
];

/// `(id, name, description, teacher id, batch)`
const COURSES: [(&str, &str, &str, &str, &str); 6] = [
    ("1", "Mathematics", "Algebra, Geometry, and Calculus fundamentals", "2", "Batch A"),
    ("2", "Science", "Physics, Chemistry, and Biology basics", "2", "Batch A"),
    ("3", "English Literature", "Reading, writing, and literary analysis", "3", "Batch B"),
    ("4", "History", "World history and social studies", "3", "Batch B"),
    ("5", "Computer Science", "Programming and digital literacy", "2", "Batch C"),
    ("6", "Art & Design", "Creative arts and visual design", "3", "Batch C"),
];

/// Staff `(username, password)` pairs created by [`generate`].
pub const STAFF_LOGINS: [(&str, &str); 3] = [
    ("admin", "admin123"),
    ("teacher1", "teacher123"),
    ("teacher2", "teacher123"),
];
/// Password of every generated student.
pub const STUDENT_PASSWORD: &str = "student123";

const ATTENDANCE_PER_STUDENT: usize = 20;
const PERFORMANCE_PER_STUDENT: usize = 8;
const PRESENT_PROBABILITY: f64 = 0.85;
const YEAR: i32 = 2024;

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn staff_user(id: &str, (username, password): (&str, &str), role: Role, full_name: &str, address: &str) -> UserSeed {
    UserSeed {
        id: id.to_string(),
        username: username.to_string(),
        email: format!("{username}@school.com"),
        password: password.to_string(),
        role,
        full_name: full_name.to_string(),
        address: Some(address.to_string()),
    }
}

fn first_of_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(YEAR, 1, 1).unwrap_or_default()
}

/// A random day of the generated school year.
fn random_day(rng: &mut StdRng) -> NaiveDate {
    let offset = rng.random_range(0..365);
    first_of_year()
        .checked_add_days(Days::new(offset))
        .unwrap_or_else(first_of_year)
}

fn attendance_for(rng: &mut StdRng, student_id: &str, courses: &[&str]) -> Vec<AttendanceRecord> {
    (0..ATTENDANCE_PER_STUDENT)
        .map(|i| AttendanceRecord {
            id: format!("att_{student_id}_{i}"),
            student_id: student_id.to_string(),
            course_id: pick(rng, courses).to_string(),
            date: random_day(rng),
            present: rng.random_bool(PRESENT_PROBABILITY),
        })
        .collect()
}

fn performance_for(rng: &mut StdRng, student_id: &str, courses: &[&str]) -> Vec<PerformanceRecord> {
    (0..PERFORMANCE_PER_STUDENT)
        .map(|i| {
            let score: u8 = rng.random_range(60..=100);
            let month = rng.random_range(1..=12);
            let day = rng.random_range(1..=28);
            PerformanceRecord {
                id: format!("perf_{student_id}_{i}"),
                student_id: student_id.to_string(),
                course_id: pick(rng, courses).to_string(),
                assignment: pick(rng, &ASSIGNMENTS).to_string(),
                score: f64::from(score),
                max_score: 100.0,
                date: NaiveDate::from_ymd_opt(YEAR, month, day).unwrap_or_else(first_of_year),
            }
        })
        .collect()
}

/// Generates a school for `student_count` students from `seed`.
///
/// Student `n` (1-based) is owned by user `n + 3`; users 1 to 3 are the
/// administrator and the two teachers. Attendance and grades only reference
/// courses of the student's own batch.
#[must_use]
pub fn generate(seed: u64, student_count: usize) -> SeedData {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut users = vec![
        staff_user("1", STAFF_LOGINS[0], Role::Admin, "System Administrator", "123 School St"),
        staff_user("2", STAFF_LOGINS[1], Role::Teacher, "John Teacher", "456 Education Ave"),
        staff_user("3", STAFF_LOGINS[2], Role::Teacher, "Sarah Wilson", "321 Academy Blvd"),
    ];
    let mut students = Vec::with_capacity(student_count);

    for n in 1..=student_count {
        let first = pick(&mut rng, &FIRST_NAMES);
        let last = pick(&mut rng, &LAST_NAMES);
        let house: u16 = rng.random_range(1..=999);
        let street = pick(&mut rng, &STREETS);
        let (batch, courses) = BATCHES[rng.random_range(0..BATCHES.len())];

        let student_id = n.to_string();
        let user_id = (n + 3).to_string();
        let username = format!("{}{}{n}", first.to_lowercase(), last.to_lowercase());

        users.push(UserSeed {
            id: user_id.clone(),
            email: format!("{username}@school.com"),
            username,
            password: STUDENT_PASSWORD.to_string(),
            role: Role::Student,
            full_name: format!("{first} {last}"),
            address: Some(format!("{house} {street}")),
        });

        let attendance = attendance_for(&mut rng, &student_id, &courses);
        let performance = performance_for(&mut rng, &student_id, &courses);
        students.push(Student {
            id: student_id,
            user_id,
            courses: courses.iter().map(ToString::to_string).collect(),
            batch: batch.to_string(),
            attendance,
            performance,
        });
    }

    let courses = COURSES
        .iter()
        .map(|&(id, name, description, teacher_id, batch)| Course {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            teacher_id: teacher_id.to_string(),
            batch: batch.to_string(),
            students: students
                .iter()
                .filter(|s| s.batch == batch)
                .map(|s| s.id.clone())
                .collect(),
        })
        .collect();

    SeedData {
        users,
        courses,
        students,
    }
}
