//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honored for local development; in production the
//! values are injected into the environment by the deployment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound for the number of matches in one recent-stats reply.
pub const MAX_RECENT_MATCHES: usize = 10;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Discord ---
    /// Ed25519 public key used to verify interaction signatures (raw bytes)
    pub discord_public_key: Vec<u8>,
    /// Application ID (only needed for command registration)
    pub discord_application_id: Option<String>,
    /// Bot token (only needed for command registration)
    pub discord_bot_token: Option<String>,

    // --- PUBG API ---
    pub pubg_api_key: String,
    pub pubg_api_url: String,
    /// Shard used for registration and profile lookups
    pub default_shard: String,
    pub http_timeout: Duration,
    /// Default number of matches shown by the `matches` command
    pub recent_match_limit: usize,
    /// Time allowed to build an interaction reply; Discord gives up after 3s
    pub reply_budget: Duration,

    // --- Server ---
    /// Path of the JSON document holding player registrations
    pub player_data_path: PathBuf,
    pub port: u16,
}

impl Config {
    /// Config for tests only. The public key is all zeroes, so tests that
    /// exercise signature checks replace it with a generated key.
    pub fn test_default() -> Self {
        Self {
            discord_public_key: vec![0u8; 32],
            discord_application_id: Some("test_application_id".to_string()),
            discord_bot_token: Some("test_bot_token".to_string()),
            pubg_api_key: "test_api_key".to_string(),
            pubg_api_url: "http://127.0.0.1:9".to_string(),
            default_shard: "steam".to_string(),
            http_timeout: Duration::from_secs(2),
            recent_match_limit: 5,
            reply_budget: Duration::from_millis(2500),
            player_data_path: env::temp_dir().join("pubg-stats-bot-test/players.json"),
            port: 8080,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let public_key_hex = env::var("DISCORD_PUBLIC_KEY")
            .map_err(|_| ConfigError::Missing("DISCORD_PUBLIC_KEY"))?;
        let discord_public_key = parse_public_key(&public_key_hex)?;

        let http_timeout_secs: u64 = env::var("PUBG_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PUBG_HTTP_TIMEOUT_SECS", "not an integer".into()))?;

        let recent_match_limit: usize = env::var("RECENT_MATCH_LIMIT")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("RECENT_MATCH_LIMIT", "not an integer".into()))?;

        let reply_budget_ms: u64 = env::var("INTERACTION_REPLY_BUDGET_MS")
            .unwrap_or_else(|_| "2500".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("INTERACTION_REPLY_BUDGET_MS", "not an integer".into())
            })?;

        Ok(Self {
            discord_public_key,
            discord_application_id: env::var("DISCORD_APPLICATION_ID").ok(),
            discord_bot_token: env::var("DISCORD_BOT_TOKEN")
                .ok()
                .map(|v| v.trim().to_string()),

            pubg_api_key: env::var("PUBG_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("PUBG_API_KEY"))?,
            pubg_api_url: env::var("PUBG_API_URL")
                .unwrap_or_else(|_| "https://api.pubg.com".to_string()),
            default_shard: env::var("PUBG_DEFAULT_SHARD").unwrap_or_else(|_| "steam".to_string()),
            http_timeout: Duration::from_secs(http_timeout_secs),
            recent_match_limit: recent_match_limit.clamp(1, MAX_RECENT_MATCHES),
            reply_budget: Duration::from_millis(reply_budget_ms),

            player_data_path: env::var("PLAYER_DATA_PATH")
                .unwrap_or_else(|_| "data/players.json".to_string())
                .into(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }
}

/// Decode a hex-encoded Ed25519 public key.
fn parse_public_key(value: &str) -> Result<Vec<u8>, ConfigError> {
    let bytes = hex::decode(value.trim())
        .map_err(|e| ConfigError::Invalid("DISCORD_PUBLIC_KEY", e.to_string()))?;
    if bytes.len() != 32 {
        return Err(ConfigError::Invalid(
            "DISCORD_PUBLIC_KEY",
            format!("expected 32 bytes, got {}", bytes.len()),
        ));
    }
    Ok(bytes)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
