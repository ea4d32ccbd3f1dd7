//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types handed to callers
//! - `wire.rs` — Raw serde structs matching API responses
//! - `convert.rs` — `From` conversions from wire to domain types
//! - `service.rs` — Service trait + its pipeline-backed implementation
//! - `state.rs` — Orchestrators owning fetch state and publishing snapshots

pub mod coin;
pub mod detail;
pub mod favorites;
pub mod price_history;
