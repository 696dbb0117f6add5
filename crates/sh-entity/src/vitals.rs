//! Health and energy bookkeeping.
//!
//! Two orthogonal, one-way switches:
//!
//! - `intact` flips to `false` when health reaches 0.  A broken entity
//!   ignores every further health change.
//! - `conscious` (organisms only) flips to `false` when energy reaches 0 and
//!   blocks further energy changes.  Nothing currently restores it.

/// Result of a health or energy modification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VitalChange {
    /// The entity was already broken/unconscious; nothing changed.
    Unaffected,
    /// The value changed and is still above zero.
    Applied,
    /// The value hit zero on this call; the switch has flipped.
    Depleted,
}

/// Mutable health/energy state.
#[derive(Clone, Debug, PartialEq)]
pub struct Vitals {
    health:    f64,
    intact:    bool,
    /// `None` for non-organisms.
    energy:    Option<f64>,
    conscious: Option<bool>,
}

pub const MAX_ENERGY: f64 = 100.0;

impl Vitals {
    pub fn new(stamina: i32, organism: bool) -> Self {
        Self {
            health:    f64::from(stamina),
            intact:    true,
            energy:    organism.then_some(MAX_ENERGY),
            conscious: organism.then_some(true),
        }
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn is_intact(&self) -> bool {
        self.intact
    }

    pub fn energy(&self) -> Option<f64> {
        self.energy
    }

    /// Non-organisms are never unconscious.
    pub fn is_conscious(&self) -> bool {
        self.conscious.unwrap_or(true)
    }

    pub fn conscious(&self) -> Option<bool> {
        self.conscious
    }

    /// Apply a health delta.  Every delta, damage or healing, is reduced by
    /// `resistance` percent; the result is clamped to `[0, stamina]`.
    pub fn mod_health(&mut self, delta: f64, stamina: i32, resistance: i32) -> VitalChange {
        if !self.intact {
            return VitalChange::Unaffected;
        }

        let delta = delta * f64::from(100 - resistance) / 100.0;
        self.health = (self.health + delta).clamp(0.0, f64::from(stamina));

        if self.health == 0.0 {
            self.intact = false;
            VitalChange::Depleted
        } else {
            VitalChange::Applied
        }
    }

    /// Apply an energy delta, clamped to `[0, 100]`.  A no-op that reports
    /// `Applied` for non-organisms.
    pub fn mod_energy(&mut self, delta: f64) -> VitalChange {
        let Some(energy) = self.energy else {
            return VitalChange::Applied;
        };
        if !self.is_conscious() {
            return VitalChange::Unaffected;
        }

        let energy = (energy + delta).clamp(0.0, MAX_ENERGY);
        self.energy = Some(energy);

        if energy == 0.0 {
            self.conscious = Some(false);
            VitalChange::Depleted
        } else {
            VitalChange::Applied
        }
    }
}
