//! Seed data loading.
//!
//! A fixture file is plain TOML:
//!
//! ```toml
//! [[users]]
//! id = "1"
//! username = "admin"
//! email = "admin@school.com"
//! password = "admin123"
//! role = "admin"
//! full_name = "System Administrator"
//!
//! [[courses]]
//! id = "1"
//! name = "Mathematics"
//! # ...
//!
//! [[students]]
//! id = "1"
//! user_id = "4"
//! # ...
//!
//! [[students.attendance]]
//! id = "att_1_0"
//! date = "2024-03-01"
//! # ...
//! ```
//!
//! Passwords are plaintext in the file and hashed when the snapshot is built.

use crate::{
    config::{SeedSettings, generator},
    core::{School, integrity},
    entities::{Course, Role, Student, User},
    errors::{Error, Result},
    session,
};
use serde::Deserialize;
use std::{collections::HashMap, path::Path};
use tracing::{debug, info, instrument, warn};

#[allow(missing_docs)]
/// A user as written in seed data, with a plaintext password.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserSeed {
    pub id: String,
    /// Login name, matched exactly
    pub username: String,
    pub email: String,
    /// Plaintext, only ever held until [`SeedData::into_school`]
    pub password: String,
    pub role: Role,
    pub full_name: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Everything needed to build a [`School`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SeedData {
    /// All accounts, staff first
    #[serde(default)]
    pub users: Vec<UserSeed>,
    /// Course catalogue
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Student records with their attendance and grades
    #[serde(default)]
    pub students: Vec<Student>,
}

impl SeedData {
    /// Hashes the passwords and builds the snapshot.
    ///
    /// Each distinct plaintext is hashed once and the hash shared between the
    /// users that have it.
    pub fn into_school(self) -> Result<School> {
        let mut hashes: HashMap<String, String> = HashMap::new();
        let mut users = Vec::with_capacity(self.users.len());

        for seed in self.users {
            let password_hash = if let Some(hash) = hashes.get(&seed.password) {
                hash.clone()
            } else {
                let hash = session::hash_password(&seed.password)?;
                hashes.insert(seed.password.clone(), hash.clone());
                hash
            };

            users.push(User {
                id: seed.id,
                username: seed.username,
                email: seed.email,
                password_hash,
                role: seed.role,
                full_name: seed.full_name,
                address: seed.address,
            });
        }

        debug!("Hashed {} distinct passwords", hashes.len());
        Ok(School::new(users, self.courses, self.students))
    }
}

/// Parses seed data from TOML text.
pub fn parse_seed(contents: &str) -> Result<SeedData> {
    toml::from_str(contents).map_err(|e| Error::Seed {
        message: format!("Failed to parse seed data: {e}"),
    })
}

/// Reads and parses a seed fixture file.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let path_ref = path.as_ref();
    debug!("Loading seed fixtures from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Seed {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;

    parse_seed(&contents)
}

/// Builds the school snapshot from the configured source and logs every
/// integrity issue found in it.
#[instrument(skip(settings))]
pub fn load_school(settings: &SeedSettings) -> Result<School> {
    let data = match &settings.fixtures {
        Some(path) => {
            info!("Loading seed fixtures from {}", path.display());
            load_seed(path)?
        }
        None => {
            info!(
                "Generating {} students with seed {}",
                settings.student_count, settings.generator_seed
            );
            generator::generate(settings.generator_seed, settings.student_count)
        }
    };

    let school = data.into_school()?;

    let issues = integrity::check(&school);
    for issue in &issues {
        warn!("Seed data integrity: {}", issue);
    }

    info!(
        "School loaded: {} users, {} courses, {} students, {} integrity issues",
        school.users().len(),
        school.courses().len(),
        school.students().len(),
        issues.len()
    );
    Ok(school)
}
