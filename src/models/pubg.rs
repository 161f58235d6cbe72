// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PUBG API response shapes.
//!
//! The API speaks JSON:API: every response is a `data` document, and the
//! match endpoint additionally embeds its participants and rosters in an
//! `included` array. The `*Document` types mirror the wire format; the
//! plain types are what the rest of the crate works with.

use serde::{Deserialize, Deserializer};

/// A player found by name or ID.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerIdentity {
    /// Account ID (`account.…`)
    pub id: String,
    pub name: String,
    /// Shard the account lives on
    pub shard: String,
    pub clan_id: Option<String>,
}

/// A player's profile with their recent match IDs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub identity: PlayerIdentity,
    /// Match IDs in upstream order (most recent first)
    pub match_ids: Vec<String>,
}

/// One match with its participants and rosters.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub id: String,
    pub game_mode: String,
    pub map_name: String,
    /// Match start (ISO 8601)
    pub created_at: String,
    pub participants: Vec<Participant>,
    pub rosters: Vec<Roster>,
}

/// Per-player-per-match stat record.
#[derive(Debug, Clone)]
pub struct Participant {
    /// Participant resource ID (referenced by rosters)
    pub id: String,
    pub stats: ParticipantStats,
}

/// Stat block embedded in a participant.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStats {
    pub player_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub damage_dealt: f64,
    #[serde(default)]
    pub revives: u32,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub heals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub time_survived: f64,
    #[serde(default)]
    pub walk_distance: f64,
    #[serde(default)]
    pub ride_distance: f64,
}

/// A team within a match.
#[derive(Debug, Clone)]
pub struct Roster {
    pub id: String,
    /// Final placement, if reported
    pub rank: Option<u32>,
    pub won: bool,
    /// IDs of the participant resources on this team
    pub participant_ids: Vec<String>,
}

/// Clan details.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanInfo {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub level: u32,
    pub member_count: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────────

/// `{ "type": ..., "id": ... }` reference inside a relationship.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelationshipList {
    #[serde(default)]
    pub data: Vec<ResourceRef>,
}

/// Response of `GET /shards/{shard}/players?filter[playerNames]=…`.
#[derive(Debug, Deserialize)]
pub struct PlayerListDocument {
    #[serde(default)]
    pub data: Vec<PlayerResource>,
}

/// Response of `GET /shards/{shard}/players/{id}`.
#[derive(Debug, Deserialize)]
pub struct PlayerDocument {
    pub data: PlayerResource,
}

#[derive(Debug, Deserialize)]
pub struct PlayerResource {
    pub id: String,
    pub attributes: PlayerAttributes,
    #[serde(default)]
    pub relationships: PlayerRelationships,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAttributes {
    pub name: String,
    #[serde(default)]
    pub shard_id: Option<String>,
    #[serde(default)]
    pub clan_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerRelationships {
    #[serde(default)]
    pub matches: RelationshipList,
}

impl PlayerResource {
    /// Convert to an identity, falling back to the requested shard when the
    /// response does not name one.
    pub fn into_identity(self, requested_shard: &str) -> PlayerIdentity {
        self.into_profile(requested_shard).identity
    }

    pub fn into_profile(self, requested_shard: &str) -> PlayerProfile {
        let match_ids = self
            .relationships
            .matches
            .data
            .into_iter()
            .filter(|r| r.kind == "match")
            .map(|r| r.id)
            .collect();

        PlayerProfile {
            identity: PlayerIdentity {
                id: self.id,
                name: self.attributes.name,
                shard: self
                    .attributes
                    .shard_id
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| requested_shard.to_string()),
                // The API reports "no clan" as an empty string
                clan_id: self.attributes.clan_id.filter(|c| !c.is_empty()),
            },
            match_ids,
        }
    }
}

/// Response of `GET /shards/{shard}/matches/{id}`.
#[derive(Debug, Deserialize)]
pub struct MatchDocument {
    pub data: MatchResource,
    #[serde(default)]
    pub included: Vec<IncludedResource>,
}

#[derive(Debug, Deserialize)]
pub struct MatchResource {
    pub id: String,
    pub attributes: MatchAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAttributes {
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub map_name: String,
    #[serde(default)]
    pub created_at: String,
}

/// Entry of a match's `included` array.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IncludedResource {
    Participant(ParticipantResource),
    Roster(RosterResource),
    /// Telemetry assets and anything else we do not read
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantResource {
    pub id: String,
    pub attributes: ParticipantAttributes,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantAttributes {
    pub stats: ParticipantStats,
}

#[derive(Debug, Deserialize)]
pub struct RosterResource {
    pub id: String,
    pub attributes: RosterAttributes,
    #[serde(default)]
    pub relationships: RosterRelationships,
}

#[derive(Debug, Deserialize)]
pub struct RosterAttributes {
    #[serde(default)]
    pub stats: RosterStats,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub won: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterStats {
    #[serde(default)]
    pub rank: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterRelationships {
    #[serde(default)]
    pub participants: RelationshipList,
}

impl From<MatchDocument> for MatchRecord {
    fn from(doc: MatchDocument) -> Self {
        let mut participants = Vec::new();
        let mut rosters = Vec::new();

        for resource in doc.included {
            match resource {
                IncludedResource::Participant(p) => participants.push(Participant {
                    id: p.id,
                    stats: p.attributes.stats,
                }),
                IncludedResource::Roster(r) => rosters.push(Roster {
                    id: r.id,
                    rank: r.attributes.stats.rank,
                    won: r.attributes.won,
                    participant_ids: r
                        .relationships
                        .participants
                        .data
                        .into_iter()
                        .map(|p| p.id)
                        .collect(),
                }),
                IncludedResource::Other => {}
            }
        }

        MatchRecord {
            id: doc.data.id,
            game_mode: doc.data.attributes.game_mode,
            map_name: doc.data.attributes.map_name,
            created_at: doc.data.attributes.created_at,
            participants,
            rosters,
        }
    }
}

/// Response of `GET /shards/{shard}/clans/{id}`.
#[derive(Debug, Deserialize)]
pub struct ClanDocument {
    pub data: ClanResource,
}

#[derive(Debug, Deserialize)]
pub struct ClanResource {
    pub id: String,
    pub attributes: ClanAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanAttributes {
    pub clan_name: String,
    #[serde(default)]
    pub clan_tag: String,
    #[serde(default)]
    pub clan_level: u32,
    #[serde(default)]
    pub clan_member_count: u32,
}

impl From<ClanDocument> for ClanInfo {
    fn from(doc: ClanDocument) -> Self {
        ClanInfo {
            id: doc.data.id,
            name: doc.data.attributes.clan_name,
            tag: doc.data.attributes.clan_tag,
            level: doc.data.attributes.clan_level,
            member_count: doc.data.attributes.clan_member_count,
        }
    }
}

/// Rosters report `won` as the string "true"/"false"; accept a bool too.
fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.eq_ignore_ascii_case("true"),
    })
}
