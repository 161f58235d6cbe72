// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! PUBG stats bot: Discord slash commands backed by the PUBG API
//!
//! This crate provides the HTTP interactions endpoint that links Discord
//! users to PUBG accounts and reports their recent match statistics.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::PlayerStore;
use services::{MatchAggregator, StatsApi};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: PlayerStore,
    pub stats_api: Arc<dyn StatsApi>,
    pub aggregator: MatchAggregator,
}

impl AppState {
    /// Build state around one stats client shared by handlers and the aggregator.
    pub fn new(config: Config, store: PlayerStore, stats_api: Arc<dyn StatsApi>) -> Self {
        Self {
            aggregator: MatchAggregator::new(stats_api.clone()),
            config,
            store,
            stats_api,
        }
    }
}
