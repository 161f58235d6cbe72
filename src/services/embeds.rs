// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reply formatting for Discord embeds.

use crate::error::{ApiError, AppError};
use crate::models::interaction::{ModalData, ModalRow, TextInput};
use crate::models::{AggregateStats, ClanInfo, Embed, MatchStat, PlayerRecord, StoreStats};
use crate::time_utils::format_utc_rfc3339;

pub const COLOR_SUCCESS: u32 = 0x2ecc71;
pub const COLOR_INFO: u32 = 0xf2a900;
pub const COLOR_WARNING: u32 = 0xe67e22;
pub const COLOR_ERROR: u32 = 0xe74c3c;

/// Modal asking for the in-game name.
pub fn register_modal() -> ModalData {
    ModalData {
        custom_id: crate::models::command::REGISTER_MODAL_ID.to_string(),
        title: "Link your PUBG account".to_string(),
        components: vec![ModalRow::text_input(TextInput {
            kind: 4,
            custom_id: crate::models::command::PLAYER_NAME_INPUT_ID.to_string(),
            label: "PUBG player name".to_string(),
            style: 1,
            min_length: 1,
            max_length: 32,
            required: true,
            placeholder: Some("Exact in-game name (case sensitive)".to_string()),
        })],
    }
}

pub fn registered(record: &PlayerRecord, shard: &str) -> Embed {
    Embed::new("✅ Account linked", COLOR_SUCCESS)
        .description(format!(
            "You are now registered as **{}**.",
            record.player_name
        ))
        .field("Player", &record.player_name, true)
        .field("Shard", shard, true)
        .field(
            "Clan ID",
            record.clan_id.as_deref().unwrap_or("None"),
            true,
        )
        .field("Account ID", format!("`{}`", record.player_id), false)
}

pub fn profile(record: &PlayerRecord, clan: Option<&ClanInfo>) -> Embed {
    let mut embed = Embed::new(format!("🎮 {}", record.player_name), COLOR_INFO)
        .field("Account ID", format!("`{}`", record.player_id), false)
        .field("Registered", format_utc_rfc3339(record.saved_at), true)
        .field("Last updated", format_utc_rfc3339(record.updated_at), true);

    if let Some(clan) = clan {
        embed = embed.field("Clan", format!("{} [{}]", clan.name, clan.tag), false);
    } else if let Some(clan_id) = &record.clan_id {
        embed = embed.field("Clan ID", clan_id.as_str(), false);
    }
    embed
}

pub fn clan(clan: &ClanInfo) -> Embed {
    Embed::new(format!("🛡️ {} [{}]", clan.name, clan.tag), COLOR_INFO)
        .field("Level", clan.level.to_string(), true)
        .field("Members", clan.member_count.to_string(), true)
}

/// Recent matches, one field per match, with a totals field at the end.
pub fn recent_matches(player_name: &str, matches: &[MatchStat]) -> Embed {
    let title = format!("📊 Recent matches for {}", player_name);
    if matches.is_empty() {
        return Embed::new(title, COLOR_WARNING).description("No recent matches found.");
    }

    let mut embed = Embed::new(title, COLOR_INFO).description(format!(
        "Your last {} match{}.",
        matches.len(),
        if matches.len() == 1 { "" } else { "es" }
    ));

    for (i, m) in matches.iter().enumerate() {
        let name = format!(
            "{}. {} · {} · {}",
            i + 1,
            map_display_name(&m.map_name),
            game_mode_display_name(&m.game_mode),
            rank_display(m.team_rank, m.team_won)
        );
        let value = format!(
            "Kills **{}** · Damage **{:.0}** · Assists {} · Revives {} · Heals {}\nSurvived {} · Walked {} · Rode {}",
            m.kills,
            m.damage_dealt,
            m.assists,
            m.revives,
            m.heals,
            format_duration(m.time_survived),
            format_distance(m.walk_distance),
            format_distance(m.ride_distance),
        );
        embed = embed.field(name, value, false);
    }

    let totals = AggregateStats::from_matches(matches);
    embed.field(
        "Totals",
        format!(
            "Kills **{}** · Damage **{:.0}** · Revives **{}**",
            totals.kills, totals.damage_dealt, totals.revives
        ),
        false,
    )
}

pub fn unregistered(removed: bool) -> Embed {
    if removed {
        Embed::new("👋 Account unlinked", COLOR_SUCCESS)
            .description("Your PUBG account is no longer linked.")
    } else {
        Embed::new("Nothing to unlink", COLOR_WARNING)
            .description("You did not have a linked PUBG account.")
    }
}

pub fn not_registered() -> Embed {
    Embed::new("Not registered", COLOR_WARNING)
        .description("Link your PUBG account first with `/register`.")
}

pub fn no_clan() -> Embed {
    Embed::new("No clan", COLOR_WARNING)
        .description("Your linked PUBG account is not in a clan.")
}

pub fn store_stats(stats: &StoreStats) -> Embed {
    Embed::new("🤖 Bot statistics", COLOR_INFO)
        .field("Registered players", stats.total_users.to_string(), true)
        .field("In a clan", stats.users_with_clans.to_string(), true)
        .field("Without a clan", stats.users_without_clans.to_string(), true)
}

/// User-facing error reply.
pub fn error(err: &AppError) -> Embed {
    let description = match err {
        AppError::Api(ApiError::NotFound(_)) => {
            "Player not found. Check the exact in-game name (it is case sensitive)."
        }
        AppError::Api(ApiError::RateLimited) => {
            "The PUBG API is busy right now. Please try again in a minute."
        }
        AppError::Api(ApiError::Unauthorized) => {
            "The bot is misconfigured. Please tell the server admins."
        }
        AppError::Api(ApiError::Unreachable(_)) => {
            "The PUBG API is not responding. Please try again later."
        }
        AppError::BadRequest(msg) => msg.as_str(),
        _ => "Something went wrong. Please try again later.",
    };

    Embed::new("❌ Error", COLOR_ERROR).description(description)
}

/// Display name for a PUBG map ID.
pub fn map_display_name(map_id: &str) -> &str {
    match map_id {
        "Baltic_Main" | "Erangel_Main" => "Erangel",
        "Desert_Main" => "Miramar",
        "Savage_Main" => "Sanhok",
        "DihorOtok_Main" => "Vikendi",
        "Range_Main" => "Camp Jackal",
        "Summerland_Main" => "Karakin",
        "Chimera_Main" => "Paramo",
        "Heaven_Main" => "Haven",
        "Tiger_Main" => "Taego",
        "Kiki_Main" => "Deston",
        "Neon_Main" => "Rondo",
        other => other,
    }
}

/// `squad-fpp` → `Squad FPP`.
pub fn game_mode_display_name(mode: &str) -> String {
    mode.split('-')
        .map(|part| match part {
            "fpp" | "tpp" => part.to_uppercase(),
            _ => {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placement with a medal for the podium.
pub fn rank_display(rank: Option<u32>, won: bool) -> String {
    match rank {
        Some(1) => "🥇 #1 Winner winner chicken dinner!".to_string(),
        Some(2) => "🥈 #2".to_string(),
        Some(3) => "🥉 #3".to_string(),
        Some(r) => format!("#{}", r),
        None if won => "🏆 Won".to_string(),
        None => "Unranked".to_string(),
    }
}

/// Seconds → `12m 5s`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{}m {}s", total / 60, total % 60)
}

/// Meters → `1.2 km`.
pub fn format_distance(meters: f64) -> String {
    format!("{:.1} km", meters.max(0.0) / 1000.0)
}
