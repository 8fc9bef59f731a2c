//! Account commands - login, logout and whoami.
//!
//! Each Discord user has at most one session; logging in again replaces it.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, reply, session_user, views},
        errors::{Error, Result},
        session,
    };
    use tracing::info;

    /// Signs in with a SchoolBuddy username and password.
    #[poise::command(slash_command, ephemeral)]
    pub async fn login(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Your username"] username: String,
        #[description = "Your password"] password: String,
    ) -> Result<()> {
        let data = ctx.data();
        let user = session::authenticate(&data.school, username.trim(), &password)?.clone();

        let session = data.sessions.login(ctx.author().id.get(), user).await;
        info!(
            "Discord user {} logged in as {}",
            ctx.author().id,
            session.user().username
        );

        let text = format!(
            "✅ Logged in as **{}** ({}). Try `/dashboard`.",
            session.user().full_name,
            session.user().role
        );
        reply(ctx, &text).await
    }

    /// Signs out.
    #[poise::command(slash_command, ephemeral)]
    pub async fn logout(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let text = if ctx.data().sessions.logout(ctx.author().id.get()).await {
            info!("Discord user {} logged out", ctx.author().id);
            "👋 You have been logged out."
        } else {
            "You were not logged in."
        };
        reply(ctx, text).await
    }

    /// Shows the profile of the logged-in user.
    #[poise::command(slash_command, ephemeral)]
    pub async fn whoami(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user = session_user(ctx).await?;
        reply(ctx, &views::render_profile(&user)?).await
    }
}

// Re-export all commands
pub use inner::*;
