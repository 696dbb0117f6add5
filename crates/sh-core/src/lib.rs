//! `sh-core`: foundational types for the shepherd grid simulation.
//!
//! This crate is a dependency of every other `sh-*` crate.  It has no `sh-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Point`, radius enumeration, direction normalisation  |
//! | [`ids`]         | `EntityId`                                            |
//! | [`rng`]         | `Dice` trait, `SimRng` (the world's single RNG)       |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`error`]       | `WorldError`, `WorldResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WorldError, WorldResult};
pub use geo::Point;
pub use ids::EntityId;
pub use rng::{Dice, SimRng};
pub use time::{SimClock, SimConfig, Tick};
