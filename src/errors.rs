use crate::core::permission::{Action, Resource};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Seed data error: {message}")]
    Seed { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("You are not logged in. Use `/login` first.")]
    NotLoggedIn,

    #[error("You don't have permission to {action} {resource}.")]
    PermissionDenied { action: Action, resource: Resource },

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Error::FrameworkError(Box::new(value))
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Error::PasswordHash(value.to_string())
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
