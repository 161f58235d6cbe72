// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use pubg_stats_bot::config::Config;
use pubg_stats_bot::db::PlayerStore;
use pubg_stats_bot::error::ApiError;
use pubg_stats_bot::models::pubg::{Participant, ParticipantStats, Roster};
use pubg_stats_bot::models::{ClanInfo, MatchRecord, PlayerIdentity, PlayerProfile};
use pubg_stats_bot::routes::create_router;
use pubg_stats_bot::services::StatsApi;
use pubg_stats_bot::AppState;
use ring::rand::SystemRandom;
use ring::signature::{Ed25519KeyPair, KeyPair};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Generate a unique store path for test isolation.
#[allow(dead_code)]
pub fn unique_store_path() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir()
        .join(format!("pubg-stats-bot-{}-{}", nanos, n))
        .join("players.json")
}

/// In-memory stand-in for the PUBG API.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeStatsApi {
    /// Keyed by player name
    pub players: HashMap<String, PlayerIdentity>,
    /// Keyed by account ID
    pub profiles: HashMap<String, PlayerProfile>,
    /// Keyed by match ID, with an artificial response delay
    pub matches: HashMap<String, (Duration, Result<MatchRecord, ApiError>)>,
    /// Keyed by clan ID
    pub clans: HashMap<String, ClanInfo>,
}

#[allow(dead_code)]
impl FakeStatsApi {
    pub fn with_player(mut self, name: &str, id: &str, clan_id: Option<&str>) -> Self {
        self.players.insert(
            name.to_string(),
            PlayerIdentity {
                id: id.to_string(),
                name: name.to_string(),
                shard: "steam".to_string(),
                clan_id: clan_id.map(String::from),
            },
        );
        self
    }

    pub fn with_profile(mut self, id: &str, name: &str, match_ids: &[&str]) -> Self {
        self.profiles.insert(
            id.to_string(),
            PlayerProfile {
                identity: PlayerIdentity {
                    id: id.to_string(),
                    name: name.to_string(),
                    shard: "steam".to_string(),
                    clan_id: None,
                },
                match_ids: match_ids.iter().map(|m| m.to_string()).collect(),
            },
        );
        self
    }

    pub fn with_match(mut self, record: MatchRecord, delay_ms: u64) -> Self {
        self.matches.insert(
            record.id.clone(),
            (Duration::from_millis(delay_ms), Ok(record)),
        );
        self
    }

    pub fn with_match_error(mut self, match_id: &str, error: ApiError) -> Self {
        self.matches
            .insert(match_id.to_string(), (Duration::ZERO, Err(error)));
        self
    }

    pub fn with_clan(mut self, id: &str, name: &str, tag: &str) -> Self {
        self.clans.insert(
            id.to_string(),
            ClanInfo {
                id: id.to_string(),
                name: name.to_string(),
                tag: tag.to_string(),
                level: 3,
                member_count: 12,
            },
        );
        self
    }
}

#[async_trait]
impl StatsApi for FakeStatsApi {
    async fn find_player_by_name(
        &self,
        name: &str,
        _shard: &str,
    ) -> Result<PlayerIdentity, ApiError> {
        self.players
            .get(name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("player {}", name)))
    }

    async fn get_player_by_id(&self, id: &str, _shard: &str) -> Result<PlayerProfile, ApiError> {
        self.profiles
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("player {}", id)))
    }

    async fn get_match(&self, match_id: &str, _shard: &str) -> Result<MatchRecord, ApiError> {
        let (delay, result) = self
            .matches
            .get(match_id)
            .cloned()
            .unwrap_or((Duration::ZERO, Err(ApiError::NotFound(match_id.to_string()))));
        tokio::time::sleep(delay).await;
        result
    }

    async fn get_clan_info(&self, clan_id: &str, _shard: &str) -> Result<ClanInfo, ApiError> {
        self.clans
            .get(clan_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("clan {}", clan_id)))
    }
}

/// A match where `player_id` (if given) scored `kills` and placed `rank`.
#[allow(dead_code)]
pub fn match_record(id: &str, player_id: Option<&str>, kills: u32, rank: Option<u32>) -> MatchRecord {
    let mut participants = vec![Participant {
        id: format!("{}-other", id),
        stats: ParticipantStats {
            player_id: "account.someone-else".to_string(),
            kills: 9,
            damage_dealt: 900.0,
            ..Default::default()
        },
    }];
    let mut rosters = vec![Roster {
        id: format!("{}-roster-other", id),
        rank: Some(1),
        won: true,
        participant_ids: vec![format!("{}-other", id)],
    }];

    if let Some(player_id) = player_id {
        participants.push(Participant {
            id: format!("{}-me", id),
            stats: ParticipantStats {
                player_id: player_id.to_string(),
                name: "Alice".to_string(),
                kills,
                damage_dealt: 100.0 * kills as f64,
                revives: 1,
                time_survived: 1200.0,
                walk_distance: 2500.0,
                ..Default::default()
            },
        });
        rosters.push(Roster {
            id: format!("{}-roster-me", id),
            rank,
            won: rank == Some(1),
            participant_ids: vec![format!("{}-me", id)],
        });
    }

    MatchRecord {
        id: id.to_string(),
        game_mode: "squad-fpp".to_string(),
        map_name: "Baltic_Main".to_string(),
        created_at: "2024-03-01T12:00:00Z".to_string(),
        participants,
        rosters,
    }
}

/// Signs request bodies the way Discord does.
#[allow(dead_code)]
pub struct TestSigner {
    key_pair: Ed25519KeyPair,
}

#[allow(dead_code)]
impl TestSigner {
    pub fn new() -> Self {
        let pkcs8 = Ed25519KeyPair::generate_pkcs8(&SystemRandom::new()).unwrap();
        Self {
            key_pair: Ed25519KeyPair::from_pkcs8(pkcs8.as_ref()).unwrap(),
        }
    }

    pub fn public_key(&self) -> Vec<u8> {
        self.key_pair.public_key().as_ref().to_vec()
    }

    /// Build a signed POST /interactions request.
    pub fn request(&self, body: &serde_json::Value) -> Request<Body> {
        let body = serde_json::to_vec(body).unwrap();
        let timestamp = "1700000000";
        let signature = self
            .key_pair
            .sign(&[timestamp.as_bytes(), body.as_slice()].concat());

        Request::builder()
            .method("POST")
            .uri("/interactions")
            .header("content-type", "application/json")
            .header("x-signature-ed25519", hex::encode(signature.as_ref()))
            .header("x-signature-timestamp", timestamp)
            .body(Body::from(body))
            .unwrap()
    }
}

/// Create a test app backed by a fake PUBG API and a fresh store.
/// Returns the router, the shared state, and the signer matching its key.
#[allow(dead_code)]
pub fn create_test_app(api: FakeStatsApi) -> (axum::Router, Arc<AppState>, TestSigner) {
    create_test_app_with_config(api, |_| {})
}

/// Like `create_test_app`, with a hook to adjust the config first.
#[allow(dead_code)]
pub fn create_test_app_with_config(
    api: FakeStatsApi,
    configure: impl FnOnce(&mut Config),
) -> (axum::Router, Arc<AppState>, TestSigner) {
    let signer = TestSigner::new();

    let mut config = Config::test_default();
    config.discord_public_key = signer.public_key();
    config.player_data_path = unique_store_path();
    configure(&mut config);

    let store = PlayerStore::new(&config.player_data_path);
    let state = Arc::new(AppState::new(config, store, Arc::new(api)));

    (create_router(state.clone()), state, signer)
}
