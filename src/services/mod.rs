// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod discord;
pub mod embeds;
pub mod pubg;

pub use aggregator::MatchAggregator;
pub use discord::DiscordClient;
pub use pubg::{PubgClient, StatsApi};
