//! Player registration model for storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored mapping from a Discord user to a PUBG account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// PUBG account ID (`account.…`)
    pub player_id: String,
    /// In-game name at the time of registration
    pub player_name: String,
    /// PUBG clan ID, if the player is in a clan
    pub clan_id: Option<String>,
    /// When the user first registered (never changes)
    pub saved_at: DateTime<Utc>,
    /// Last time the registration was written
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when a user registers or re-registers.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRegistration {
    pub player_id: String,
    pub player_name: String,
    pub clan_id: Option<String>,
}

impl PlayerRecord {
    /// Build a fresh record for a first-time registration.
    pub fn new(registration: PlayerRegistration, now: DateTime<Utc>) -> Self {
        Self {
            player_id: registration.player_id,
            player_name: registration.player_name,
            clan_id: registration.clan_id,
            saved_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the registration fields, keeping `saved_at`.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn apply(&mut self, registration: PlayerRegistration, now: DateTime<Utc>) {
        self.player_id = registration.player_id;
        self.player_name = registration.player_name;
        self.clan_id = registration.clan_id;
        self.updated_at = now.max(self.updated_at);
    }
}

/// Registration counts for the `botstats` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_users: usize,
    pub users_with_clans: usize,
    pub users_without_clans: usize,
}
