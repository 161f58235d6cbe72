//! Persistence layer (JSON document store).

pub mod json_store;

pub use json_store::{PlayerMap, PlayerStore};
