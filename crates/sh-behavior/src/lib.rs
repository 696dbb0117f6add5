//! `sh-behavior`: what entities decide and what their actions do.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                    |
//! |-------------------|-------------------------------------------------------------|
//! | [`surroundings`]  | `Surroundings` / `SurroundingsMut`: the world as behaviours see it |
//! | [`movement`]      | Move (`step`) and AutoMove (`auto_move`, `choose_dest`)     |
//! | [`sensing`]       | Sense (`scan`, `sense`) and Seek (`seek`)                   |
//! | [`combat`]        | Attack (`attack`, `hit_chance`, `power`, `damage`)          |
//! | [`routine`]       | Hunt, `next_action` dispatch, `Resolver`, `tick_entity`     |
//!
//! # Design notes
//!
//! Each entity tick has two halves:
//!
//! 1. **Decide**: an entity with nothing pending asks [`next_action`] for an
//!    [`Action`](sh_entity::Action).  Deciding reads the world and draws
//!    from its dice but never moves or damages anything.
//!
//! 2. **Resolve**: the pending action counts down; when it matures,
//!    [`Resolver`] runs its effect against the world (relocations, damage,
//!    log lines) and reports the energy cost.
//!
//! The world implements [`SurroundingsMut`]; the entity being ticked is
//! checked out of it for the duration, so behaviours get `&mut Entity` and
//! `&mut World` at the same time without aliasing.

pub mod combat;
pub mod movement;
pub mod routine;
pub mod sensing;
pub mod surroundings;

#[cfg(test)]
mod tests;

pub use combat::{attack, damage, hit_chance, power};
pub use movement::{auto_move, choose_dest, step};
pub use routine::{hunt, next_action, tick_entity, Resolver};
pub use sensing::{scan, seek, sense};
pub use surroundings::{Surroundings, SurroundingsMut};

/// Validated property values are small and non-negative; clamp anything
/// else to zero rather than wrapping.
pub(crate) fn as_ticks(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
