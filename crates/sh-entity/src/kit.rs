//! Capability components.
//!
//! An entity's [`Kit`] holds whichever of [`Mover`], [`Senser`] and
//! [`Attacker`] its kind was built with.  Each component owns its validated
//! properties plus the behaviour state that goes with them (heading,
//! sensing memory).  The decision logic that drives them lives in
//! `sh-behavior`; this module only stores and guards the data.

use sh_core::{EntityId, Point};

use crate::{AttackProps, MoveProps, SenseProps, WanderProps};

// ── Mover ─────────────────────────────────────────────────────────────────────

/// Directed movement, optionally randomised (`wander`).
#[derive(Clone, Debug, PartialEq)]
pub struct Mover {
    props:   MoveProps,
    wander:  Option<WanderProps>,
    heading: Point,
}

impl Mover {
    pub(crate) fn new(props: MoveProps, wander: Option<WanderProps>, heading: Point) -> Self {
        Self { props, wander, heading: heading.to_dir() }
    }

    pub fn props(&self) -> &MoveProps {
        &self.props
    }

    /// Randomised-movement settings, if this mover wanders.
    pub fn wander(&self) -> Option<&WanderProps> {
        self.wander.as_ref()
    }

    /// Current direction of travel; always a unit step or zero.
    pub fn heading(&self) -> Point {
        self.heading
    }

    /// Point the entity along `dir`, normalised to a single step.
    pub fn change_dir(&mut self, dir: Point) {
        self.heading = dir.to_dir();
    }
}

// ── Senser ────────────────────────────────────────────────────────────────────

/// Best-known target from the last successful scan.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SensingMemory {
    pub point:    Option<Point>,
    pub entity:   Option<EntityId>,
    pub priority: usize,
}

impl SensingMemory {
    /// Remembered target point and entity, if any.
    pub fn focus(&self) -> Option<(Point, EntityId)> {
        self.point.zip(self.entity)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Senser {
    props:  SenseProps,
    memory: SensingMemory,
}

impl Senser {
    pub(crate) fn new(props: SenseProps) -> Self {
        Self { props, memory: SensingMemory::default() }
    }

    pub fn props(&self) -> &SenseProps {
        &self.props
    }

    pub fn memory(&self) -> &SensingMemory {
        &self.memory
    }

    pub fn remember(&mut self, point: Point, entity: EntityId, priority: usize) {
        self.memory = SensingMemory {
            point:  Some(point),
            entity: Some(entity),
            priority,
        };
    }

    pub fn forget(&mut self) {
        self.memory = SensingMemory::default();
    }
}

// ── Attacker ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Attacker {
    props: AttackProps,
}

impl Attacker {
    pub(crate) fn new(props: AttackProps) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &AttackProps {
        &self.props
    }
}

// ── Kit ───────────────────────────────────────────────────────────────────────

/// The capability components one entity holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Kit {
    pub mover:    Option<Mover>,
    pub senser:   Option<Senser>,
    pub attacker: Option<Attacker>,
}
