//! The closed catalogue of entity kinds.
//!
//! Every kind is fixed at compile time: its name, display glyph, default
//! blueprint and the [`Routine`] that decides its next action.  Adding a
//! species means adding a variant here, and the compiler points at every
//! match that needs updating.

use std::fmt;

use sh_core::{Dice, Point};

use crate::{
    AttackProps, Blueprint, Body, Categories, Entity, EntityResult, Metabolism, MoveProps,
    SenseProps, Size, Tracking, WanderProps,
};

/// Which capabilities `next_action` drives for a kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Routine {
    /// Never does anything on its own.
    Idle,
    /// Auto-move every step.
    Wander,
    /// Sense for a task and step toward whatever was found.
    Seek(&'static str),
    /// Scan, strike adjacent prey, otherwise roam.
    Hunt,
}

impl Routine {
    /// Tracking task consulted by [`Routine::Hunt`].
    pub const HUNT_TASK: &'static str = "hunt";
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    StonePillar,
    Grass,
    WanderingShrub,
    GluttonousShambler,
    /// The user-controlled shepherd.
    Player,
}

impl Kind {
    pub const ALL: [Kind; 5] = [
        Kind::StonePillar,
        Kind::Grass,
        Kind::WanderingShrub,
        Kind::GluttonousShambler,
        Kind::Player,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Kind::StonePillar        => "stone pillar",
            Kind::Grass              => "grass",
            Kind::WanderingShrub     => "wandering shrub",
            Kind::GluttonousShambler => "gluttonous shambler",
            Kind::Player             => "shepherd",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Kind::StonePillar        => 'I',
            Kind::Grass              => '"',
            Kind::WanderingShrub     => 'h',
            Kind::GluttonousShambler => 'M',
            Kind::Player             => '@',
        }
    }

    pub fn routine(self) -> Routine {
        match self {
            Kind::StonePillar | Kind::Grass | Kind::Player => Routine::Idle,
            Kind::WanderingShrub                           => Routine::Wander,
            Kind::GluttonousShambler                       => Routine::Hunt,
        }
    }

    pub fn is_player(self) -> bool {
        matches!(self, Kind::Player)
    }

    /// Default blueprint for this kind.
    pub fn blueprint(self) -> Blueprint {
        match self {
            Kind::StonePillar => Blueprint::new(Body {
                stamina:    100,
                resistance: 100,
                ..Body::new(Size::Giant, 20)
            })
            .categories(Categories::new().with("organic", false).with("exterior", "hard")),

            Kind::Grass => Blueprint::new(Body {
                stamina:    10,
                resistance: 0,
                ..Body::new(Size::Tiny, 2)
            })
            .organism(Metabolism { metabolism: 0, regeneration: 0 })
            .categories(Categories::new().with("organic", true).with("exterior", "fibrous"))
            .traversable(true),

            Kind::WanderingShrub => Blueprint::new(Body {
                stamina:    100,
                resistance: 20,
                agility:    1,
                ..Body::new(Size::Medium, 4)
            })
            .organism(Metabolism { metabolism: 0, regeneration: 3 })
            .movement(MoveProps { move_delay: 10, move_cost: 10 })
            .wander(WanderProps { move_prob: 85, pivot_prob: 50 })
            .categories(Categories::new().with("organic", true).with("exterior", "fibrous")),

            Kind::GluttonousShambler => Blueprint::new(Body {
                stamina:    85,
                resistance: 35,
                agility:    10,
                ..Body::new(Size::Large, 4)
            })
            .organism(Metabolism { metabolism: 20, regeneration: 5 })
            .movement(MoveProps { move_delay: 10, move_cost: 5 })
            .wander(WanderProps::default())
            .sense(SenseProps {
                rescan_prob: 5,
                ..SenseProps::new(
                    8,
                    Tracking::new().with(
                        Routine::HUNT_TASK,
                        Categories::new().with("organic", true).with("exterior", "fleshy"),
                    ),
                )
            })
            .attack(AttackProps {
                attack_skill:    10,
                attack_strength: 18,
                attack_delay:    15,
                attack_cost:     5,
                ..AttackProps::new("slam")
            })
            .categories(Categories::new().with("organic", true).with("exterior", "fleshy")),

            Kind::Player => Blueprint::new(Body {
                stamina:    100,
                resistance: 10,
                agility:    10,
                ..Body::new(Size::Medium, 5)
            })
            .organism(Metabolism { metabolism: 10, regeneration: 10 })
            .movement(MoveProps { move_delay: 10, move_cost: 10 })
            .categories(Categories::new().with("organic", true).with("skin", "fleshy")),
        }
    }

    /// Build a validated entity of this kind.  Movers start with a random
    /// heading drawn from `dice`.
    pub fn spawn<D: Dice + ?Sized>(self, dice: &mut D) -> EntityResult<Entity> {
        let mut blueprint = self.blueprint();
        if blueprint.movement.is_some() {
            blueprint.heading = Point::random(dice, -1..=1, -1..=1);
        }
        Entity::new(self, blueprint)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
