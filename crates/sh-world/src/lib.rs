//! `sh-world`: the grid the shepherd simulation runs on.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`cell`]   | `Cell`: floor entities plus at most one blocking occupant     |
//! | [`world`]  | `World`: cells, id/name indices, player, RNG, log, `tick`     |
//! | [`legend`] | `Legend` and `World::from_legend`                             |
//! | [`error`]  | `LegendError`, `LegendResult<T>`                              |
//!
//! Spatial invariant violations are `sh_core::WorldError`; this crate only
//! adds the errors of building a world from text.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for the id and name indices.  |

pub mod cell;
pub mod error;
pub mod legend;
pub mod world;


pub use cell::Cell;
pub use error::{LegendError, LegendResult};
pub use legend::Legend;
pub use world::{Placement, World};
