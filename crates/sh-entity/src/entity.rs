//! The simulation unit: identity, validated properties, vitals, categories,
//! capability kit and at most one in-flight action.

use std::fmt;

use sh_core::{EntityId, Point};

use crate::{
    Action, AttackProps, Attacker, Body, Categories, EntityResult, FieldError, Kind, Kit,
    Metabolism, MoveProps, Mover, Problem, PropertyValidationError, Routine, SenseProps,
    Senser, SensingMemory, Validate, VitalChange, Vitals, WanderProps,
};

/// Organisms burn energy and regenerate once every this many ticks.
pub const UPKEEP_INTERVAL: u64 = 10;

// ── Blueprint ─────────────────────────────────────────────────────────────────

/// Everything needed to construct one entity, before validation.
///
/// ```rust
/// use sh_entity::{Blueprint, Body, Categories, Kind, Metabolism, Size};
///
/// let grass = Blueprint::new(Body { stamina: 10, resistance: 0, ..Body::new(Size::Tiny, 2) })
///     .organism(Metabolism { metabolism: 0, regeneration: 0 })
///     .categories(Categories::new().with("organic", true))
///     .traversable(true);
///
/// let entity = sh_entity::Entity::new(Kind::Grass, grass).unwrap();
/// assert!(entity.is_organism());
/// ```
#[derive(Clone, Debug)]
pub struct Blueprint {
    pub body:        Body,
    pub metabolism:  Option<Metabolism>,
    pub movement:    Option<MoveProps>,
    pub wander:      Option<WanderProps>,
    pub sense:       Option<SenseProps>,
    pub attack:      Option<AttackProps>,
    pub categories:  Categories,
    pub traversable: bool,
    /// Initial heading for movers.
    pub heading:     Point,
}

impl Blueprint {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            metabolism:  None,
            movement:    None,
            wander:      None,
            sense:       None,
            attack:      None,
            categories:  Categories::new(),
            traversable: false,
            heading:     Point::ZERO,
        }
    }

    pub fn organism(mut self, metabolism: Metabolism) -> Self {
        self.metabolism = Some(metabolism);
        self
    }

    pub fn movement(mut self, props: MoveProps) -> Self {
        self.movement = Some(props);
        self
    }

    pub fn wander(mut self, props: WanderProps) -> Self {
        self.wander = Some(props);
        self
    }

    pub fn sense(mut self, props: SenseProps) -> Self {
        self.sense = Some(props);
        self
    }

    pub fn attack(mut self, props: AttackProps) -> Self {
        self.attack = Some(props);
        self
    }

    pub fn categories(mut self, categories: Categories) -> Self {
        self.categories = categories;
        self
    }

    pub fn traversable(mut self, traversable: bool) -> Self {
        self.traversable = traversable;
        self
    }

    pub fn heading(mut self, heading: Point) -> Self {
        self.heading = heading;
        self
    }

    /// Check every group and the capabilities `routine` depends on.
    fn validate(&self, routine: Routine) -> Vec<FieldError> {
        let mut errors = Vec::new();
        self.body.validate(&mut errors);
        if let Some(m) = &self.metabolism {
            m.validate(&mut errors);
        }
        if let Some(m) = &self.movement {
            m.validate(&mut errors);
        }
        if let Some(w) = &self.wander {
            w.validate(&mut errors);
        }
        if let Some(s) = &self.sense {
            s.validate(&mut errors);
        }
        if let Some(a) = &self.attack {
            a.validate(&mut errors);
        }

        let missing = |field| FieldError { field, problem: Problem::Missing };
        match routine {
            Routine::Idle => {}
            Routine::Wander => {
                if self.movement.is_none() {
                    errors.push(missing("movement"));
                }
            }
            Routine::Seek(task) => {
                if self.movement.is_none() {
                    errors.push(missing("movement"));
                }
                match &self.sense {
                    None => errors.push(missing("sense")),
                    Some(s) if s.tracking.task(task).is_none() => {
                        errors.push(missing("tracking.task"));
                    }
                    Some(_) => {}
                }
            }
            Routine::Hunt => {
                if self.movement.is_none() {
                    errors.push(missing("movement"));
                }
                match &self.sense {
                    None => errors.push(missing("sense")),
                    Some(s) if s.tracking.task(Routine::HUNT_TASK).is_none() => {
                        errors.push(missing("tracking.task"));
                    }
                    Some(_) => {}
                }
                if self.attack.is_none() {
                    errors.push(missing("attack"));
                }
            }
        }
        errors
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Entity {
    id:          EntityId,
    kind:        Kind,
    body:        Body,
    metabolism:  Option<Metabolism>,
    vitals:      Vitals,
    categories:  Categories,
    traversable: bool,
    kit:         Kit,
    action:      Option<Action>,
    ticks:       u64,
}

impl Entity {
    /// Validate `blueprint` and build an entity of `kind` with a fresh id.
    ///
    /// Sensing entities always wander straight (`move_prob = 100`,
    /// `pivot_prob = 0`) regardless of what the blueprint says.
    pub fn new(kind: Kind, blueprint: Blueprint) -> EntityResult<Self> {
        let errors = blueprint.validate(kind.routine());
        if !errors.is_empty() {
            return Err(PropertyValidationError { entity: kind.name(), errors });
        }

        let Blueprint {
            body,
            metabolism,
            movement,
            mut wander,
            sense,
            attack,
            categories,
            traversable,
            heading,
        } = blueprint;

        if sense.is_some() && wander.is_some() {
            wander = Some(WanderProps::STRAIGHT);
        }

        let kit = Kit {
            mover:    movement.map(|m| Mover::new(m, wander, heading)),
            senser:   sense.map(Senser::new),
            attacker: attack.map(Attacker::new),
        };

        Ok(Self {
            id: EntityId::next(),
            kind,
            vitals: Vitals::new(body.stamina, metabolism.is_some()),
            body,
            metabolism,
            categories,
            traversable,
            kit,
            action: None,
            ticks: 0,
        })
    }

    // ── Identity ──────────────────────────────────────────────────────────

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn glyph(&self) -> char {
        self.kind.glyph()
    }

    pub fn is_player(&self) -> bool {
        self.kind.is_player()
    }

    // ── Properties ────────────────────────────────────────────────────────

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn metabolism(&self) -> Option<&Metabolism> {
        self.metabolism.as_ref()
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// Whether other entities may share this entity's cell.
    pub fn traversable(&self) -> bool {
        self.traversable
    }

    pub fn is_organism(&self) -> bool {
        self.metabolism.is_some()
    }

    // ── Capabilities ──────────────────────────────────────────────────────

    pub fn kit(&self) -> &Kit {
        &self.kit
    }

    pub fn kit_mut(&mut self) -> &mut Kit {
        &mut self.kit
    }

    // ── Vitals ────────────────────────────────────────────────────────────

    pub fn health(&self) -> f64 {
        self.vitals.health()
    }

    pub fn energy(&self) -> Option<f64> {
        self.vitals.energy()
    }

    pub fn is_intact(&self) -> bool {
        self.vitals.is_intact()
    }

    pub fn is_conscious(&self) -> bool {
        self.vitals.is_conscious()
    }

    /// `true` when the entity can still choose and carry out actions.
    pub fn is_active(&self) -> bool {
        self.is_intact() && self.is_conscious()
    }

    pub fn mod_health(&mut self, delta: f64) -> VitalChange {
        let change = self.vitals.mod_health(delta, self.body.stamina, self.body.resistance);
        if change == VitalChange::Unaffected {
            tracing::warn!(entity = %self.id, name = self.name(), "attempted to mod health on non-intact entity");
        }
        change
    }

    pub fn mod_energy(&mut self, delta: f64) -> VitalChange {
        self.vitals.mod_energy(delta)
    }

    // ── Action bookkeeping ────────────────────────────────────────────────

    pub fn pending_action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    pub fn take_action(&mut self) -> Option<Action> {
        self.action.take()
    }

    /// Commit to `action`, replacing whatever was pending.
    pub fn set_action(&mut self, action: Action) {
        self.action = Some(action);
    }

    /// Ticks this entity has lived through.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Count one more tick; returns the new total.
    pub fn begin_tick(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    /// Passive metabolism and regeneration, applied on every
    /// [`UPKEEP_INTERVAL`]th tick.  Returns `true` if upkeep ran.
    pub fn apply_upkeep(&mut self) -> bool {
        let Some(m) = self.metabolism.clone() else {
            return false;
        };
        if self.ticks == 0 || self.ticks % UPKEEP_INTERVAL != 0 {
            return false;
        }
        self.mod_energy(-f64::from(m.metabolism) / 10.0);
        if self.is_intact() {
            self.mod_health(f64::from(m.regeneration) / 10.0);
        }
        true
    }

    // ── Display ───────────────────────────────────────────────────────────

    /// Read-only snapshot of the mutable state.
    pub fn state(&self) -> StateView {
        StateView {
            health:    self.vitals.health(),
            stamina:   self.body.stamina,
            intact:    self.vitals.is_intact(),
            energy:    self.vitals.energy(),
            conscious: self.vitals.conscious(),
            heading:   self.kit.mover.as_ref().map(Mover::heading),
            sensing:   self.kit.senser.as_ref().map(|s| *s.memory()),
            action:    self.action.as_ref().map(|a| PendingView {
                effect:  a.effect().as_str(),
                elapsed: a.elapsed(),
                delay:   a.delay(),
            }),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity(name={})", self.name())
    }
}

// ── StateView ─────────────────────────────────────────────────────────────────

/// The in-flight action, as shown to a UI.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PendingView {
    pub effect:  &'static str,
    pub elapsed: u32,
    pub delay:   u32,
}

/// Snapshot of an entity's mutable state for inspection panels.
#[derive(Clone, Debug, PartialEq)]
pub struct StateView {
    pub health:    f64,
    pub stamina:   i32,
    pub intact:    bool,
    pub energy:    Option<f64>,
    pub conscious: Option<bool>,
    pub heading:   Option<Point>,
    pub sensing:   Option<SensingMemory>,
    pub action:    Option<PendingView>,
}

impl fmt::Display for StateView {
    /// One `key: value` line per field that applies to this entity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "health: {:.1}/{}", self.health, self.stamina)?;
        writeln!(f, "intact: {}", self.intact)?;
        if let Some(energy) = self.energy {
            writeln!(f, "energy: {energy:.1}")?;
        }
        if let Some(conscious) = self.conscious {
            writeln!(f, "conscious: {conscious}")?;
        }
        if let Some(heading) = self.heading {
            writeln!(f, "dir: {}", heading.fmt_xy())?;
        }
        if let Some(sensing) = &self.sensing {
            writeln!(f, "sensing:")?;
            match sensing.focus() {
                Some((point, id)) => {
                    writeln!(f, "  point: {}", point.fmt_xy())?;
                    writeln!(f, "  entity: {id}")?;
                }
                None => writeln!(f, "  point: none")?,
            }
            writeln!(f, "  priority: {}", sensing.priority)?;
        }
        if let Some(action) = &self.action {
            writeln!(f, "action: {} ({}/{})", action.effect, action.elapsed, action.delay)?;
        }
        Ok(())
    }
}
