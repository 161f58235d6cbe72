// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recent-match statistics.
//!
//! Handles the core workflow:
//! 1. Fetch the player's profile for their recent match IDs
//! 2. Fetch those matches concurrently
//! 3. Join each match's participants and rosters on the player ID
//! 4. Return one `MatchStat` per joined match, in match-ID order

use crate::error::ApiError;
use crate::models::pubg::{MatchRecord, Participant};
use crate::models::MatchStat;
use crate::services::StatsApi;
use futures_util::{stream, StreamExt};
use std::sync::Arc;

/// Computes per-match stats for a player from raw match data.
#[derive(Clone)]
pub struct MatchAggregator {
    api: Arc<dyn StatsApi>,
}

impl MatchAggregator {
    pub fn new(api: Arc<dyn StatsApi>) -> Self {
        Self { api }
    }

    /// Stats for the player's `limit` most recent matches.
    ///
    /// Fails only if the player's profile cannot be fetched. A match that
    /// cannot be fetched, or that does not include the player, is left out
    /// of the result with a warning.
    pub async fn compute_recent_stats(
        &self,
        player_id: &str,
        shard: &str,
        limit: usize,
    ) -> Result<Vec<MatchStat>, ApiError> {
        let profile = self.api.get_player_by_id(player_id, shard).await?;

        let match_ids: Vec<String> = profile.match_ids.into_iter().take(limit).collect();
        if match_ids.is_empty() {
            tracing::debug!(player_id, shard, "Player has no recent matches");
            return Ok(Vec::new());
        }

        // `buffered` keeps results in input order regardless of completion order
        let results: Vec<(String, Result<MatchRecord, ApiError>)> = stream::iter(match_ids)
            .map(|match_id| {
                let api = self.api.clone();
                async move {
                    let result = api.get_match(&match_id, shard).await;
                    (match_id, result)
                }
            })
            .buffered(limit.max(1))
            .collect()
            .await;

        let mut stats = Vec::with_capacity(results.len());
        for (match_id, result) in results {
            match result.and_then(|record| join_match(&record, player_id)) {
                Ok(stat) => stats.push(stat),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        match_id = %match_id,
                        player_id,
                        "Omitting match from recent stats"
                    );
                }
            }
        }

        tracing::info!(player_id, shard, matches = stats.len(), "Computed recent stats");
        Ok(stats)
    }
}

/// Join one match's participant and roster data for `player_id`.
///
/// Returns `Malformed` if the match has no participant for the player.
pub fn join_match(record: &MatchRecord, player_id: &str) -> Result<MatchStat, ApiError> {
    let participant = find_participant(record, player_id).ok_or_else(|| {
        ApiError::Malformed(format!(
            "match {} has no participant for {}",
            record.id, player_id
        ))
    })?;

    let roster = record
        .rosters
        .iter()
        .find(|r| r.participant_ids.iter().any(|id| *id == participant.id));

    let stats = &participant.stats;
    Ok(MatchStat {
        match_id: record.id.clone(),
        game_mode: record.game_mode.clone(),
        map_name: record.map_name.clone(),
        created_at: record.created_at.clone(),
        damage_dealt: stats.damage_dealt,
        revives: stats.revives,
        kills: stats.kills,
        heals: stats.heals,
        assists: stats.assists,
        time_survived: stats.time_survived,
        walk_distance: stats.walk_distance,
        ride_distance: stats.ride_distance,
        team_rank: roster.and_then(|r| r.rank),
        team_won: roster.is_some_and(|r| r.won),
    })
}

fn find_participant<'a>(record: &'a MatchRecord, player_id: &str) -> Option<&'a Participant> {
    record
        .participants
        .iter()
        .find(|p| p.stats.player_id == player_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pubg::{ParticipantStats, Roster};

    fn participant(id: &str, player_id: &str, kills: u32) -> Participant {
        Participant {
            id: id.to_string(),
            stats: ParticipantStats {
                player_id: player_id.to_string(),
                kills,
                damage_dealt: 100.0 * kills as f64,
                ..Default::default()
            },
        }
    }

    fn record(participants: Vec<Participant>, rosters: Vec<Roster>) -> MatchRecord {
        MatchRecord {
            id: "m1".to_string(),
            game_mode: "duo".to_string(),
            map_name: "Savage_Main".to_string(),
            created_at: "2024-02-02T20:00:00Z".to_string(),
            participants,
            rosters,
        }
    }

    #[test]
    fn test_join_match_picks_player_and_roster() {
        let rec = record(
            vec![
                participant("p-a", "account.other", 7),
                participant("p-b", "account.me", 2),
            ],
            vec![
                Roster {
                    id: "r1".to_string(),
                    rank: Some(1),
                    won: true,
                    participant_ids: vec!["p-a".to_string()],
                },
                Roster {
                    id: "r2".to_string(),
                    rank: Some(3),
                    won: false,
                    participant_ids: vec!["p-b".to_string()],
                },
            ],
        );

        let stat = join_match(&rec, "account.me").unwrap();

        assert_eq!(stat.kills, 2);
        assert_eq!(stat.damage_dealt, 200.0);
        assert_eq!(stat.team_rank, Some(3));
        assert!(!stat.team_won);
        assert_eq!(stat.map_name, "Savage_Main");
    }

    #[test]
    fn test_join_match_without_participant_is_malformed() {
        let rec = record(vec![participant("p-a", "account.other", 1)], vec![]);
        assert!(matches!(
            join_match(&rec, "account.me"),
            Err(ApiError::Malformed(_))
        ));
    }

    #[test]
    fn test_join_match_without_roster_rank() {
        let rec = record(
            vec![participant("p-b", "account.me", 0)],
            vec![Roster {
                id: "r2".to_string(),
                rank: None,
                won: false,
                participant_ids: vec!["p-b".to_string()],
            }],
        );

        let stat = join_match(&rec, "account.me").unwrap();
        assert_eq!(stat.team_rank, None);
        assert!(!stat.team_won);
    }

    #[test]
    fn test_join_match_with_no_containing_roster() {
        let rec = record(vec![participant("p-b", "account.me", 4)], vec![]);

        let stat = join_match(&rec, "account.me").unwrap();
        assert_eq!(stat.team_rank, None);
        assert!(!stat.team_won);
    }
}
