// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Discord REST client, used to register the bot's slash commands.

use anyhow::Context;
use serde_json::Value;

const DISCORD_API_URL: &str = "https://discord.com/api/v10";

/// Discord REST API client.
#[derive(Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    base_url: String,
    application_id: String,
    bot_token: String,
}

impl DiscordClient {
    pub fn new(application_id: String, bot_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DISCORD_API_URL.to_string(),
            application_id,
            bot_token,
        }
    }

    /// Point the client at a different API root (for tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace all global commands with `definitions`.
    ///
    /// PUT /applications/{application_id}/commands
    pub async fn register_commands(&self, definitions: &[Value]) -> anyhow::Result<usize> {
        let url = format!(
            "{}/applications/{}/commands",
            self.base_url, self.application_id
        );

        let response = self
            .http
            .put(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bot {}", self.bot_token),
            )
            .json(definitions)
            .send()
            .await
            .context("Command registration request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Discord command registration failed");
            anyhow::bail!("Command registration failed with status {}", status);
        }

        let registered: Vec<Value> = response
            .json()
            .await
            .context("Failed to parse command registration response")?;

        tracing::info!(count = registered.len(), "Slash commands registered");
        Ok(registered.len())
    }
}
