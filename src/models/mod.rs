// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod command;
pub mod interaction;
pub mod match_stat;
pub mod player;
pub mod pubg;

pub use command::{Command, ModalSubmission, RegisterForm};
pub use interaction::{Embed, Interaction, InteractionKind, InteractionResponse};
pub use match_stat::{AggregateStats, MatchStat};
pub use player::{PlayerRecord, PlayerRegistration, StoreStats};
pub use pubg::{ClanInfo, MatchRecord, PlayerIdentity, PlayerProfile};
