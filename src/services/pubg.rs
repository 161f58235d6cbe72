// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PUBG API client.
//!
//! Handles:
//! - Player lookup by name and by account ID
//! - Match detail fetching (participants and rosters included)
//! - Clan lookup
//! - Classifying failures (not found, bad key, rate limit, timeout)

use crate::config::Config;
use crate::error::ApiError;
use crate::models::pubg::{ClanDocument, MatchDocument, PlayerDocument, PlayerListDocument};
use crate::models::{ClanInfo, MatchRecord, PlayerIdentity, PlayerProfile};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Media type required by the PUBG API.
const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Read access to the game statistics service.
///
/// Implemented by [`PubgClient`]; tests substitute their own fakes.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Find a player by exact in-game name.
    async fn find_player_by_name(&self, name: &str, shard: &str)
        -> Result<PlayerIdentity, ApiError>;

    /// Get a player's profile including recent match IDs.
    async fn get_player_by_id(&self, id: &str, shard: &str) -> Result<PlayerProfile, ApiError>;

    /// Get one match with its participants and rosters.
    async fn get_match(&self, match_id: &str, shard: &str) -> Result<MatchRecord, ApiError>;

    /// Get clan details.
    async fn get_clan_info(&self, clan_id: &str, shard: &str) -> Result<ClanInfo, ApiError>;
}

/// HTTP client for the PUBG developer API.
#[derive(Clone)]
pub struct PubgClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PubgClient {
    /// Create a client. Every call is bounded by `timeout`.
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.pubg_api_url.clone(),
            config.pubg_api_key.clone(),
            config.http_timeout,
        )
    }

    /// Generic GET request with a JSON:API response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, JSON_API_MEDIA_TYPE)
            .query(query)
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body);

            // Callers decide how loudly to report this
            tracing::debug!(status = %status, error = %err, "PUBG API error response");
            return Err(err);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Malformed(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl StatsApi for PubgClient {
    async fn find_player_by_name(
        &self,
        name: &str,
        shard: &str,
    ) -> Result<PlayerIdentity, ApiError> {
        let url = format!("{}/shards/{}/players", self.base_url, shard);

        let doc: PlayerListDocument = self
            .get_json(&url, &[("filter[playerNames]", name)])
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => ApiError::NotFound(format!("player {}", name)),
                other => other,
            })?;

        // The filter takes a comma-separated list; only an exact match counts
        doc.data
            .into_iter()
            .find(|p| p.attributes.name == name)
            .map(|p| p.into_identity(shard))
            .ok_or_else(|| ApiError::NotFound(format!("player {}", name)))
    }

    async fn get_player_by_id(&self, id: &str, shard: &str) -> Result<PlayerProfile, ApiError> {
        let url = format!("{}/shards/{}/players/{}", self.base_url, shard, id);
        let doc: PlayerDocument = self.get_json(&url, &[]).await?;
        Ok(doc.data.into_profile(shard))
    }

    async fn get_match(&self, match_id: &str, shard: &str) -> Result<MatchRecord, ApiError> {
        let url = format!("{}/shards/{}/matches/{}", self.base_url, shard, match_id);
        let doc: MatchDocument = self.get_json(&url, &[]).await?;
        Ok(MatchRecord::from(doc))
    }

    async fn get_clan_info(&self, clan_id: &str, shard: &str) -> Result<ClanInfo, ApiError> {
        let url = format!("{}/shards/{}/clans/{}", self.base_url, shard, clan_id);
        let doc: ClanDocument = self.get_json(&url, &[]).await?;
        Ok(ClanInfo::from(doc))
    }
}
