//! `sh-sim`: runs a shepherd world forward in ticks and turns.
//!
//! # Ticks and turns
//!
//! ```text
//! step:        on_tick_start → World::tick → on_tick_end → clock.advance
//! turn:        step, then step until clock % turn_ticks == 0
//!              → flush world messages → on_turn_end
//! player_turn: World::move_player(delta), then turn
//! run:         step until config.end_tick(), on_turn_end at each boundary
//! ```
//!
//! A turn is what one keypress advances in an interactive front end: with
//! the default `turn_ticks` of 10 a default-speed step completes within it.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                        |
//! |-----------|-----------------------------------------------|
//! | `fx-hash` | Forwards to `sh-world/fx-hash`.               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sh_core::{Point, SimConfig};
//! use sh_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config)
//!     .map(&legend, LAYERS)
//!     .build()?;
//! let messages = sim.player_turn(Point::new(1, 0), &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
