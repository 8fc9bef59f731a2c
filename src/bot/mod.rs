//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for SchoolBuddy: slash commands,
//! autocomplete handlers, the shared bot context and the framework runner.

/// Discord command implementations (auth, dashboard, school views, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;
/// Plain-text rendering of the school views
pub mod views;

use crate::{
    config::DisplaySettings,
    core::{School, report},
    entities::User,
    errors::{Error, Result},
    session::SessionStore,
};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Shared data available to all bot commands.
///
/// The school snapshot is read-only; the session store is the only state
/// commands change.
pub struct BotData {
    /// Seeded school data
    pub school: Arc<School>,
    /// Logged-in Discord users
    pub sessions: SessionStore,
    /// Page sizes for list views
    pub display: DisplaySettings,
    /// Whether `/help` lists the generator's demo logins
    pub demo_accounts: bool,
}

impl BotData {
    /// Creates the shared context with no one logged in.
    #[must_use]
    pub fn new(school: Arc<School>, display: DisplaySettings, demo_accounts: bool) -> Self {
        Self {
            school,
            sessions: SessionStore::new(),
            display,
            demo_accounts,
        }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Sends an ephemeral text reply, cut to Discord's message limit.
pub async fn reply(ctx: Context<'_>, text: &str) -> Result<()> {
    let content = report::truncate_message(text, report::MESSAGE_LIMIT);
    ctx.send(
        poise::CreateReply::default()
            .content(content)
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// The logged-in user behind this interaction, or [`Error::NotLoggedIn`].
pub async fn session_user(ctx: Context<'_>) -> Result<User> {
    let session = ctx.data().sessions.require(ctx.author().id.get()).await?;
    Ok(session.user().clone())
}

/// Errors that are answered to the caller instead of logged as failures.
const fn is_user_facing(error: &Error) -> bool {
    matches!(
        error,
        Error::NotLoggedIn
            | Error::InvalidCredentials
            | Error::PermissionDenied { .. }
            | Error::UnknownValue { .. }
    )
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            let text = if is_user_facing(&error) {
                debug!("Command `{}` refused: {}", ctx.command().name, error);
                format!("⛔ {error}")
            } else {
                error!("Error in command `{}`: {:?}", ctx.command().name, error);
                "❌ Something went wrong while handling that command.".to_string()
            };
            if let Err(e) = reply(ctx, &text).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to Discord and serves the commands until the client stops.
#[instrument(skip(token, school, display))]
pub async fn run_bot(
    token: String,
    school: Arc<School>,
    display: DisplaySettings,
    demo_accounts: bool,
) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData::new(school, display, demo_accounts))
            })
        })
        .build();

    // Slash commands only; no message content needed.
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
