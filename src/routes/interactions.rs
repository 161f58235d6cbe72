// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interaction endpoint for Discord slash commands and modals.

use crate::config::MAX_RECENT_MATCHES;
use crate::error::{ApiError, AppError, Result};
use crate::models::command::{MATCH_COUNT_OPTION, PLAYER_NAME_INPUT_ID};
use crate::models::{
    Command, Interaction, InteractionKind, InteractionResponse, ModalSubmission,
    PlayerRecord, PlayerRegistration, RegisterForm,
};
use crate::services::embeds;
use crate::AppState;
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use std::sync::Arc;
use validator::Validate;

/// Interaction routes. The signature check is applied in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/interactions", post(handle_interaction))
}

/// What an interaction asks the bot to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Command(Command),
    Modal(ModalSubmission),
}

impl Action {
    fn resolve(interaction: &Interaction) -> Result<Self> {
        match interaction.kind() {
            InteractionKind::ApplicationCommand => {
                let name = interaction
                    .command_name()
                    .ok_or_else(|| AppError::BadRequest("Command has no name".to_string()))?;
                Command::parse(name)
                    .map(Action::Command)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown command: {}", name)))
            }
            InteractionKind::ModalSubmit => {
                let custom_id = interaction
                    .custom_id()
                    .ok_or_else(|| AppError::BadRequest("Modal has no custom_id".to_string()))?;
                ModalSubmission::parse(custom_id)
                    .map(Action::Modal)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown modal: {}", custom_id)))
            }
            other => Err(AppError::BadRequest(format!(
                "Unsupported interaction type {:?}",
                other
            ))),
        }
    }
}

/// Handle an incoming interaction (POST).
///
/// Malformed envelopes and unknown commands are client errors. Any failure
/// while running a known command, including running past the reply budget,
/// is turned into an ephemeral error reply.
async fn handle_interaction(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<InteractionResponse>> {
    let interaction: Interaction = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid interaction payload: {}", e)))?;

    if interaction.kind() == InteractionKind::Ping {
        tracing::debug!("Interaction ping");
        return Ok(Json(InteractionResponse::pong()));
    }

    let action = Action::resolve(&interaction)?;
    let user_id = interaction
        .user_id()
        .ok_or_else(|| AppError::BadRequest("Interaction has no user".to_string()))?;

    tracing::info!(user_id, action = ?action, "Interaction received");

    // A late reply is dropped by Discord, so answer with an error in time instead
    let outcome = tokio::time::timeout(
        state.config.reply_budget,
        dispatch(&state, user_id, &interaction, action),
    )
    .await
    .unwrap_or_else(|_| {
        Err(AppError::Api(ApiError::Unreachable(
            "reply deadline exceeded".to_string(),
        )))
    });

    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            log_failure(&e, user_id, action);
            InteractionResponse::embed(embeds::error(&e), true)
        }
    };

    Ok(Json(response))
}

async fn dispatch(
    state: &AppState,
    user_id: &str,
    interaction: &Interaction,
    action: Action,
) -> Result<InteractionResponse> {
    match action {
        Action::Command(Command::Register) => {
            Ok(InteractionResponse::modal(embeds::register_modal()))
        }
        Action::Modal(ModalSubmission::Register) => {
            let name = interaction
                .text_input(PLAYER_NAME_INPUT_ID)
                .ok_or_else(|| AppError::BadRequest("Player name is required.".to_string()))?;
            register(state, user_id, name).await
        }
        Action::Command(Command::Profile) => profile(state, user_id).await,
        Action::Command(Command::Matches) => {
            let count = interaction
                .integer_option(MATCH_COUNT_OPTION)
                .map(|c| c.clamp(1, MAX_RECENT_MATCHES as i64) as usize)
                .unwrap_or(state.config.recent_match_limit);
            recent_matches(state, user_id, count).await
        }
        Action::Command(Command::Clan) => clan(state, user_id).await,
        Action::Command(Command::Unregister) => {
            let removed = state.store.delete(user_id).await?;
            Ok(InteractionResponse::embed(embeds::unregistered(removed), true))
        }
        Action::Command(Command::BotStats) => {
            let stats = state.store.stats().await;
            Ok(InteractionResponse::embed(embeds::store_stats(&stats), false))
        }
    }
}

/// Look up the submitted name and link it to the user.
async fn register(state: &AppState, user_id: &str, name: &str) -> Result<InteractionResponse> {
    let form = RegisterForm::new(name);
    form.validate().map_err(|_| {
        AppError::BadRequest("Player name must be 1 to 32 characters with no commas.".to_string())
    })?;

    let shard = &state.config.default_shard;
    let identity = state
        .stats_api
        .find_player_by_name(&form.player_name, shard)
        .await?;

    let record = state
        .store
        .save(
            user_id,
            PlayerRegistration {
                player_id: identity.id,
                player_name: identity.name,
                clan_id: identity.clan_id,
            },
        )
        .await?;

    Ok(InteractionResponse::embed(
        embeds::registered(&record, &identity.shard),
        true,
    ))
}

async fn profile(state: &AppState, user_id: &str) -> Result<InteractionResponse> {
    let Some(record) = state.store.get(user_id).await else {
        return Ok(not_registered());
    };

    // Clan details are a nice-to-have; show the profile without them on failure
    let clan = match &record.clan_id {
        Some(clan_id) => match state
            .stats_api
            .get_clan_info(clan_id, &state.config.default_shard)
            .await
        {
            Ok(clan) => Some(clan),
            Err(e) => {
                tracing::warn!(error = %e, clan_id = %clan_id, "Failed to fetch clan for profile");
                None
            }
        },
        None => None,
    };

    Ok(InteractionResponse::embed(
        embeds::profile(&record, clan.as_ref()),
        false,
    ))
}

async fn recent_matches(
    state: &AppState,
    user_id: &str,
    count: usize,
) -> Result<InteractionResponse> {
    let Some(record) = state.store.get(user_id).await else {
        return Ok(not_registered());
    };

    let matches = state
        .aggregator
        .compute_recent_stats(&record.player_id, &state.config.default_shard, count)
        .await?;

    Ok(InteractionResponse::embed(
        embeds::recent_matches(&record.player_name, &matches),
        false,
    ))
}

async fn clan(state: &AppState, user_id: &str) -> Result<InteractionResponse> {
    let Some(PlayerRecord { clan_id, .. }) = state.store.get(user_id).await else {
        return Ok(not_registered());
    };
    let Some(clan_id) = clan_id else {
        return Ok(InteractionResponse::embed(embeds::no_clan(), true));
    };

    let clan = state
        .stats_api
        .get_clan_info(&clan_id, &state.config.default_shard)
        .await?;

    Ok(InteractionResponse::embed(embeds::clan(&clan), false))
}

fn not_registered() -> InteractionResponse {
    InteractionResponse::embed(embeds::not_registered(), true)
}

fn log_failure(err: &AppError, user_id: &str, action: Action) {
    match err {
        // Expected outcomes, not failures
        AppError::Api(ApiError::NotFound(_)) | AppError::BadRequest(_) => {
            tracing::debug!(error = %err, user_id, action = ?action, "Interaction rejected");
        }
        AppError::Api(ApiError::RateLimited) => {
            tracing::warn!(user_id, action = ?action, "Interaction hit PUBG rate limit");
        }
        AppError::Api(ApiError::Unauthorized) => {
            tracing::error!(user_id, action = ?action, "PUBG API key rejected; check PUBG_API_KEY");
        }
        _ => {
            tracing::error!(error = %err, user_id, action = ?action, "Interaction failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn interaction(value: serde_json::Value) -> Interaction {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_resolve_command() {
        let i = interaction(json!({ "type": 2, "data": { "name": "matches" } }));
        assert_eq!(
            Action::resolve(&i).unwrap(),
            Action::Command(Command::Matches)
        );
    }

    #[test]
    fn test_resolve_unknown_command_is_bad_request() {
        let i = interaction(json!({ "type": 2, "data": { "name": "dance" } }));
        assert!(matches!(Action::resolve(&i), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_resolve_modal() {
        let i = interaction(json!({ "type": 5, "data": { "custom_id": "register_modal" } }));
        assert_eq!(
            Action::resolve(&i).unwrap(),
            Action::Modal(ModalSubmission::Register)
        );
    }

    #[test]
    fn test_resolve_component_interaction_is_bad_request() {
        let i = interaction(json!({ "type": 3, "data": { "custom_id": "button" } }));
        assert!(matches!(Action::resolve(&i), Err(AppError::BadRequest(_))));
    }
}
