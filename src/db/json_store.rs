// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Player registrations persisted as a single JSON document.
//!
//! The whole document is read, modified in memory, and rewritten on every
//! mutation. Mutations are serialized through one mutex so concurrent
//! interactions cannot lose each other's writes. Rewrites go through a
//! temporary file and a rename, so readers always see a complete document.

use crate::error::StoreError;
use crate::models::{PlayerRecord, PlayerRegistration, StoreStats};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Keyed collection of all registrations (Discord user ID → record).
pub type PlayerMap = BTreeMap<String, PlayerRecord>;

/// JSON-file backed player store.
#[derive(Clone)]
pub struct PlayerStore {
    path: PathBuf,
    /// Single-writer guard for read-modify-write cycles.
    write_lock: Arc<Mutex<()>>,
}

impl PlayerStore {
    /// Create a store backed by `path` without touching the filesystem.
    ///
    /// The directory and document are created lazily on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create a store and make sure its document exists (empty if new).
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self::new(path);
        if !tokio::fs::try_exists(&store.path).await? {
            let _guard = store.write_lock.lock().await;
            store.write_all(&PlayerMap::new()).await?;
            tracing::info!(path = %store.path.display(), "Created empty player store");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or update a user's registration.
    ///
    /// `saved_at` is set only the first time a user registers.
    pub async fn save(
        &self,
        user_id: &str,
        registration: PlayerRegistration,
    ) -> Result<PlayerRecord, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut players = self.read_all().await;
        let now = Utc::now();

        let record = match players.get_mut(user_id) {
            Some(existing) => {
                existing.apply(registration, now);
                existing.clone()
            }
            None => {
                let record = PlayerRecord::new(registration, now);
                players.insert(user_id.to_string(), record.clone());
                record
            }
        };

        self.write_all(&players).await?;
        tracing::info!(
            user_id,
            player_id = %record.player_id,
            player_name = %record.player_name,
            "Player registration saved"
        );
        Ok(record)
    }

    /// Look up a user's registration.
    pub async fn get(&self, user_id: &str) -> Option<PlayerRecord> {
        self.read_all().await.remove(user_id)
    }

    /// Remove a user's registration. Returns whether one existed.
    pub async fn delete(&self, user_id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut players = self.read_all().await;

        if players.remove(user_id).is_none() {
            return Ok(false);
        }

        self.write_all(&players).await?;
        tracing::info!(user_id, "Player registration deleted");
        Ok(true)
    }

    /// All registrations.
    pub async fn get_all(&self) -> PlayerMap {
        self.read_all().await
    }

    /// Registration counts, split by clan membership.
    pub async fn stats(&self) -> StoreStats {
        let players = self.read_all().await;
        let users_with_clans = players.values().filter(|p| p.clan_id.is_some()).count();

        StoreStats {
            total_users: players.len(),
            users_with_clans,
            users_without_clans: players.len() - users_with_clans,
        }
    }

    /// Read the document. Missing or unreadable content reads as empty.
    async fn read_all(&self) -> PlayerMap {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return PlayerMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Failed to read player store, treating as empty");
                return PlayerMap::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(players) => players,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Malformed player store, treating as empty");
                PlayerMap::new()
            }
        }
    }

    /// Rewrite the whole document. Caller must hold `write_lock`.
    async fn write_all(&self, players: &PlayerMap) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }

        let json = serde_json::to_vec_pretty(players)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
