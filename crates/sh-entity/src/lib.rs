//! `sh-entity`: the entity model for the shepherd simulation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`props`]      | Property groups (`Body`, `MoveProps`, …), `Validate`, `FieldError` |
//! | [`categories`] | `Tag`, `Categories`, `Tracking`                                |
//! | [`vitals`]     | `Vitals` (health/energy switches), `VitalChange`               |
//! | [`kit`]        | Capability components `Mover`, `Senser`, `Attacker`, `Kit`     |
//! | [`action`]     | `Action`, `Effect`, `Executor`                                 |
//! | [`entity`]     | `Blueprint`, `Entity`, `StateView`                             |
//! | [`kind`]       | `Kind` catalogue, `Routine`                                    |
//! | [`error`]      | `PropertyValidationError`, `EntityResult<T>`                   |
//!
//! # Design notes
//!
//! Capabilities are composed, not inherited: an entity holds the components
//! its blueprint supplied, and its kind's `Routine` says which of them drive
//! `next_action`.  Properties are validated once in [`Entity::new`] and are
//! read-only afterwards; only vitals, heading, sensing memory and the pending
//! action change at runtime.

pub mod action;
pub mod categories;
pub mod entity;
pub mod error;
pub mod kind;
pub mod kit;
pub mod props;
pub mod vitals;


pub use action::{Action, Effect, Executor};
pub use categories::{Categories, Tag, Tracking};
pub use entity::{Blueprint, Entity, PendingView, StateView, UPKEEP_INTERVAL};
pub use error::{EntityResult, PropertyValidationError};
pub use kind::{Kind, Routine};
pub use kit::{Attacker, Kit, Mover, Senser, SensingMemory};
pub use props::{
    AttackProps, Body, FieldError, Metabolism, MoveProps, Problem, SenseProps, Size, Validate,
    WanderProps,
};
pub use vitals::{VitalChange, Vitals, MAX_ENERGY};
