// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Register the bot's slash commands with Discord.
//!
//! Run once after deploying, or whenever the command set changes.

use anyhow::Context;
use pubg_stats_bot::{config::Config, models::Command, services::DiscordClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let application_id = config
        .discord_application_id
        .context("DISCORD_APPLICATION_ID must be set to register commands")?;
    let bot_token = config
        .discord_bot_token
        .context("DISCORD_BOT_TOKEN must be set to register commands")?;

    let definitions = Command::definitions();
    let registered = DiscordClient::new(application_id, bot_token)
        .register_commands(&definitions)
        .await?;

    tracing::info!(registered, "Done");
    Ok(())
}
