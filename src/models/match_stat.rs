//! Per-match statistics derived from PUBG match data.
//!
//! These are computed on every request and never stored.

use serde::Serialize;

/// One player's result in one match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStat {
    pub match_id: String,
    pub game_mode: String,
    pub map_name: String,
    pub created_at: String,

    pub damage_dealt: f64,
    pub revives: u32,
    pub kills: u32,
    pub heals: u32,
    pub assists: u32,
    /// Seconds
    pub time_survived: f64,
    /// Meters
    pub walk_distance: f64,
    /// Meters
    pub ride_distance: f64,

    /// Team placement; `None` if the roster carries no rank
    pub team_rank: Option<u32>,
    pub team_won: bool,
}

/// Totals over a window of matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub matches: usize,
    pub damage_dealt: f64,
    pub kills: u32,
    pub revives: u32,
}

impl AggregateStats {
    /// Sum damage, kills and revives over `matches`.
    pub fn from_matches(matches: &[MatchStat]) -> Self {
        matches.iter().fold(Self::default(), |mut acc, m| {
            acc.matches += 1;
            acc.damage_dealt += m.damage_dealt;
            acc.kills += m.kills;
            acc.revives += m.revives;
            acc
        })
    }
}
