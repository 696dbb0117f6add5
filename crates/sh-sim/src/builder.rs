//! Fluent builder for constructing a [`Sim`].

use sh_core::{SimConfig, Tick};
use sh_world::{Legend, World};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// Exactly one world source is required:
///
/// | Method              | World                                             |
/// |---------------------|---------------------------------------------------|
/// | `.world(w)`         | `w` as is (its RNG keeps its own seed)            |
/// | `.map(legend, ls)`  | `World::from_legend(legend, ls, config.seed)`     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig { seed: 7, ..SimConfig::default() })
///     .map(&legend, &[GROUND, CREATURES])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'a> {
    config: SimConfig,
    world:  Option<World>,
    map:    Option<(&'a Legend, &'a [&'a [&'a str]])>,
}

impl<'a> SimBuilder<'a> {
    pub fn new(config: SimConfig) -> Self {
        Self { config, world: None, map: None }
    }

    /// Run an already-populated world.
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Build the world from character layers, seeded with `config.seed`.
    pub fn map(mut self, legend: &'a Legend, layers: &'a [&'a [&'a str]]) -> Self {
        self.map = Some((legend, layers));
        self
    }

    /// Validate the configuration, build the world if needed and return a
    /// ready-to-run [`Sim`].  The clock starts at the world's tick count.
    pub fn build(self) -> SimResult<Sim> {
        if self.config.turn_ticks == 0 {
            return Err(SimError::Config("turn_ticks must be at least 1".into()));
        }

        let world = match (self.world, self.map) {
            (Some(world), None) => world,
            (None, Some((legend, layers))) => World::from_legend(legend, layers, self.config.seed)?,
            (Some(_), Some(_)) => {
                return Err(SimError::Config("supply either a world or a map, not both".into()));
            }
            (None, None) => return Err(SimError::Config("no world or map supplied".into())),
        };

        let mut clock = self.config.make_clock();
        clock.current_tick = Tick(world.ticks());
        tracing::debug!(entities = world.len(), start = %clock.current_tick, "simulation built");

        Ok(Sim { config: self.config, clock, world })
    }
}
