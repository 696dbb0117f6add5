//! Typed entity properties and their construction-time validation.
//!
//! Each capability contributes one property group.  Groups are plain structs
//! whose `Default`/`new` values are the schema defaults; required values are
//! constructor parameters, so "absent" is unrepresentable.  Numeric fields
//! are signed so that out-of-range input survives until [`Validate`] reports
//! it, and a [`Blueprint`](crate::Blueprint) is only turned into an entity
//! after every group validates cleanly.
//!
//! | Group          | Field           | Range       | Default  |
//! |----------------|-----------------|-------------|----------|
//! | [`Body`]       | size            | `Size`      | required |
//! |                | mass            | 1–20        | required |
//! |                | stamina         | 1–100       | 20       |
//! |                | resistance      | 0–100       | 1        |
//! |                | agility         | 0–30        | 0        |
//! | [`Metabolism`] | metabolism      | 0–30        | 10       |
//! |                | regeneration    | 0–30        | 10       |
//! | [`MoveProps`]  | move_delay      | 1–30        | 10       |
//! |                | move_cost       | 1–30        | 10       |
//! | [`WanderProps`]| move_prob       | 0–100       | 100      |
//! |                | pivot_prob      | 0–100       | 0        |
//! | [`SenseProps`] | tracking        | non-empty   | required |
//! |                | sensitivity     | ≥ 1         | required |
//! |                | rescan_prob     | 0–100       | 0        |
//! | [`AttackProps`]| attack_name     | non-empty   | required |
//! |                | attack_strength | 1–30        | 1        |
//! |                | attack_skill    | 1–30        | 1        |
//! |                | attack_delay    | 1–30        | 10       |
//! |                | attack_cost     | 1–30        | 10       |

use std::fmt;

use crate::Tracking;

// ── Validation plumbing ───────────────────────────────────────────────────────

/// What is wrong with one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    OutOfRange { value: i64, min: i64, max: Option<i64> },
    Empty,
    /// The entity's routine needs a capability whose properties are absent.
    Missing,
}

/// One validation failure, tagged with the schema field name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field:   &'static str,
    pub problem: Problem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            Problem::OutOfRange { value, min, max: Some(max) } => {
                write!(f, "{}: {value} not in {min}..={max}", self.field)
            }
            Problem::OutOfRange { value, min, max: None } => {
                write!(f, "{}: {value} is below {min}", self.field)
            }
            Problem::Empty   => write!(f, "{}: must not be empty", self.field),
            Problem::Missing => write!(f, "{}: required but not provided", self.field),
        }
    }
}

/// A property group that can check itself against its schema.
pub trait Validate {
    /// Push one [`FieldError`] per violation onto `errors`.
    fn validate(&self, errors: &mut Vec<FieldError>);
}

pub(crate) fn check_range(
    errors: &mut Vec<FieldError>,
    field:  &'static str,
    value:  i32,
    min:    i32,
    max:    Option<i32>,
) {
    let too_high = max.is_some_and(|m| value > m);
    if value < min || too_high {
        errors.push(FieldError {
            field,
            problem: Problem::OutOfRange {
                value: value.into(),
                min:   min.into(),
                max:   max.map(Into::into),
            },
        });
    }
}

fn check_non_empty(errors: &mut Vec<FieldError>, field: &'static str, empty: bool) {
    if empty {
        errors.push(FieldError { field, problem: Problem::Empty });
    }
}

// ── Size ──────────────────────────────────────────────────────────────────────

/// Physical size class.  The enum itself enforces the 1–5 range.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Size {
    Tiny   = 1,
    Small  = 2,
    Medium = 3,
    Large  = 4,
    Giant  = 5,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Tiny   => "tiny",
            Size::Small  => "small",
            Size::Medium => "medium",
            Size::Large  => "large",
            Size::Giant  => "giant",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Body ──────────────────────────────────────────────────────────────────────

/// Properties every entity carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    pub size:       Size,
    pub mass:       i32,
    /// Maximum health.
    pub stamina:    i32,
    /// Percentage of incoming damage shrugged off.
    pub resistance: i32,
    /// Evasion in combat.
    pub agility:    i32,
}

impl Body {
    pub fn new(size: Size, mass: i32) -> Self {
        Self { size, mass, stamina: 20, resistance: 1, agility: 0 }
    }
}

impl Validate for Body {
    fn validate(&self, errors: &mut Vec<FieldError>) {
        check_range(errors, "mass", self.mass, 1, Some(20));
        check_range(errors, "stamina", self.stamina, 1, Some(100));
        check_range(errors, "resistance", self.resistance, 0, Some(100));
        check_range(errors, "agility", self.agility, 0, Some(30));
    }
}

// ── Metabolism ────────────────────────────────────────────────────────────────

/// Passive drain and recovery rates; present only on organisms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metabolism {
    pub metabolism:   i32,
    pub regeneration: i32,
}

impl Default for Metabolism {
    fn default() -> Self {
        Self { metabolism: 10, regeneration: 10 }
    }
}

impl Validate for Metabolism {
    fn validate(&self, errors: &mut Vec<FieldError>) {
        check_range(errors, "metabolism", self.metabolism, 0, Some(30));
        check_range(errors, "regeneration", self.regeneration, 0, Some(30));
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveProps {
    pub move_delay: i32,
    pub move_cost:  i32,
}

impl Default for MoveProps {
    fn default() -> Self {
        Self { move_delay: 10, move_cost: 10 }
    }
}

impl Validate for MoveProps {
    fn validate(&self, errors: &mut Vec<FieldError>) {
        check_range(errors, "move_delay", self.move_delay, 1, Some(30));
        check_range(errors, "move_cost", self.move_cost, 1, Some(30));
    }
}

/// Randomised movement: whether to move at all, and how often to turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WanderProps {
    pub move_prob:  i32,
    pub pivot_prob: i32,
}

impl WanderProps {
    /// Always move, never pivot: what sensing entities are locked to.
    pub const STRAIGHT: WanderProps = WanderProps { move_prob: 100, pivot_prob: 0 };
}

impl Default for WanderProps {
    fn default() -> Self {
        Self::STRAIGHT
    }
}

impl Validate for WanderProps {
    fn validate(&self, errors: &mut Vec<FieldError>) {
        check_range(errors, "move_prob", self.move_prob, 0, Some(100));
        check_range(errors, "pivot_prob", self.pivot_prob, 0, Some(100));
    }
}

// ── Sensing ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SenseProps {
    /// Target categories per task name.
    pub tracking:    Tracking,
    /// Chebyshev radius of a scan.
    pub sensitivity: i32,
    /// Chance (percent) that a `sense` call actually rescans.
    pub rescan_prob: i32,
}

impl SenseProps {
    pub fn new(sensitivity: i32, tracking: Tracking) -> Self {
        Self { tracking, sensitivity, rescan_prob: 0 }
    }
}

impl Validate for SenseProps {
    fn validate(&self, errors: &mut Vec<FieldError>) {
        check_non_empty(errors, "tracking", self.tracking.is_empty());
        for (task, targets) in self.tracking.iter() {
            check_non_empty(errors, "tracking.task", task.is_empty());
            check_non_empty(
                errors,
                "tracking.category",
                targets.iter().any(|(key, _)| key.is_empty()),
            );
        }
        check_range(errors, "sensitivity", self.sensitivity, 1, None);
        check_range(errors, "rescan_prob", self.rescan_prob, 0, Some(100));
    }
}

// ── Combat ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackProps {
    pub attack_name:     String,
    pub attack_strength: i32,
    pub attack_skill:    i32,
    pub attack_delay:    i32,
    pub attack_cost:     i32,
}

impl AttackProps {
    pub fn new(attack_name: impl Into<String>) -> Self {
        Self {
            attack_name:     attack_name.into(),
            attack_strength: 1,
            attack_skill:    1,
            attack_delay:    10,
            attack_cost:     10,
        }
    }
}

impl Validate for AttackProps {
    fn validate(&self, errors: &mut Vec<FieldError>) {
        check_non_empty(errors, "attack_name", self.attack_name.is_empty());
        check_range(errors, "attack_strength", self.attack_strength, 1, Some(30));
        check_range(errors, "attack_skill", self.attack_skill, 1, Some(30));
        check_range(errors, "attack_delay", self.attack_delay, 1, Some(30));
        check_range(errors, "attack_cost", self.attack_cost, 1, Some(30));
    }
}
