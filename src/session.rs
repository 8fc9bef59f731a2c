//! Session management - credential checks and per-caller login state.
//!
//! There is no ambient "current user": every front end holds a [`SessionStore`]
//! and looks the caller's [`Session`] up explicitly. Logging out drops the
//! session; nothing else needs tearing down.

use crate::{
    core::School,
    entities::User,
    errors::{Error, Result},
};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Utc};
use std::{collections::HashMap, sync::OnceLock};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Hashes a plaintext password into an argon2 PHC string with a fresh salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Checks a plaintext password against a stored PHC string.
///
/// Returns `Ok(false)` for a wrong password and an error only when the stored
/// hash cannot be decoded.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(password_hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// A hash that no real account uses, verified against when the username is
/// unknown so both failure paths run argon2.
static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

fn dummy_hash() -> Option<&'static str> {
    DUMMY_HASH
        .get_or_init(|| hash_password("unknown user placeholder").ok())
        .as_deref()
}

/// Finds the user with exactly this username and verifies the password.
///
/// An unknown username and a wrong password both yield
/// [`Error::InvalidCredentials`], so callers cannot tell which one failed.
pub fn authenticate<'a>(school: &'a School, username: &str, password: &str) -> Result<&'a User> {
    let Some(user) = school.user_by_username(username) else {
        info!("Login attempt for unknown user {}", username);
        if let Some(hash) = dummy_hash() {
            let _ = verify_password(password, hash);
        }
        return Err(Error::InvalidCredentials);
    };

    if verify_password(password, &user.password_hash)? {
        debug!("User {} authenticated", user.username);
        Ok(user)
    } else {
        info!("Invalid login attempt for user {}", user.username);
        Err(Error::InvalidCredentials)
    }
}

/// The authenticated user bound to one caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session for `user` now.
    #[must_use]
    pub fn new(user: User) -> Self {
        Self {
            user,
            started_at: Utc::now(),
        }
    }

    /// The logged-in user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// When the user logged in.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// Sessions keyed by caller id (a Discord user id for the bot).
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<u64, Session>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `user` to `caller`, replacing any previous session.
    pub async fn login(&self, caller: u64, user: User) -> Session {
        let session = Session::new(user);
        let previous = self
            .sessions
            .write()
            .await
            .insert(caller, session.clone());

        if let Some(previous) = previous {
            debug!(
                "Caller {} switched from {} to {}",
                caller,
                previous.user.username,
                session.user.username
            );
        }
        session
    }

    /// Ends the caller's session. Returns whether one existed.
    pub async fn logout(&self, caller: u64) -> bool {
        self.sessions.write().await.remove(&caller).is_some()
    }

    /// The caller's session, if logged in.
    pub async fn current(&self, caller: u64) -> Option<Session> {
        self.sessions.read().await.get(&caller).cloned()
    }

    /// The caller's session, or [`Error::NotLoggedIn`].
    pub async fn require(&self, caller: u64) -> Result<Session> {
        self.current(caller).await.ok_or(Error::NotLoggedIn)
    }

    /// Number of logged-in callers.
    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::Role, test_utils::*};

    fn school_with_password(password: &str) -> Result<School> {
        let mut admin = named_user("1", Role::Admin, "admin", "System Administrator");
        admin.password_hash = hash_password(password)?;
        Ok(School::new(vec![admin], Vec::new(), Vec::new()))
    }

    #[test]
    fn test_hash_is_salted_and_verifies() -> Result<()> {
        let first = hash_password("admin123")?;
        let second = hash_password("admin123")?;
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2"));
        assert!(verify_password("admin123", &first)?);
        assert!(!verify_password("admin124", &first)?);
        Ok(())
    }

    #[test]
    fn test_authenticate_success_and_failures() -> Result<()> {
        let school = school_with_password("admin123")?;

        let user = authenticate(&school, "admin", "admin123")?;
        assert_eq!(user.id, "1");

        assert!(matches!(
            authenticate(&school, "admin", "wrong"),
            Err(Error::InvalidCredentials)
        ));
        assert!(matches!(
            authenticate(&school, "nobody", "admin123"),
            Err(Error::InvalidCredentials)
        ));
        // Usernames match exactly.
        assert!(matches!(
            authenticate(&school, "Admin", "admin123"),
            Err(Error::InvalidCredentials)
        ));
        Ok(())
    }

    #[test]
    fn test_unknown_user_still_runs_verification() -> Result<()> {
        let school = school_with_password("admin123")?;

        assert!(matches!(
            authenticate(&school, "ghost", "admin123"),
            Err(Error::InvalidCredentials)
        ));
        let hash = dummy_hash().unwrap_or_default();
        assert!(hash.starts_with("$argon2"));
        assert!(!verify_password("admin123", hash)?);
        Ok(())
    }

    #[test]
    fn test_corrupt_hash_is_an_error() {
        let school = sample_school();
        assert!(matches!(
            authenticate(&school, "admin", "admin123"),
            Err(Error::PasswordHash(_))
        ));
    }

    #[tokio::test]
    async fn test_login_logout_cycle() -> Result<()> {
        let store = SessionStore::new();
        assert!(store.current(7).await.is_none());
        assert!(matches!(store.require(7).await, Err(Error::NotLoggedIn)));

        let session = store.login(7, test_user("2", Role::Teacher)).await;
        assert_eq!(session.user().id, "2");
        assert_eq!(store.require(7).await?.user().role, Role::Teacher);
        assert_eq!(store.active_count().await, 1);

        assert!(store.logout(7).await);
        assert!(!store.logout(7).await);
        assert!(store.current(7).await.is_none());
        assert_eq!(store.active_count().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_sessions_are_per_caller() {
        let store = SessionStore::new();
        store.login(1, test_user("1", Role::Admin)).await;
        store.login(2, test_user("4", Role::Student)).await;

        let first = store.current(1).await.map(|s| s.user().role);
        let second = store.current(2).await.map(|s| s.user().role);
        assert_eq!(first, Some(Role::Admin));
        assert_eq!(second, Some(Role::Student));
    }

    #[tokio::test]
    async fn test_login_replaces_previous_session() {
        let store = SessionStore::new();
        store.login(1, test_user("1", Role::Admin)).await;
        store.login(1, test_user("4", Role::Student)).await;

        assert_eq!(store.active_count().await, 1);
        let current = store.current(1).await.map(|s| s.user().id.clone());
        assert_eq!(current.as_deref(), Some("4"));
    }
}
