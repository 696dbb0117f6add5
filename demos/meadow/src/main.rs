//! meadow: headless walk through the shepherd's meadow.
//!
//! Builds the 40×20 meadow, plays a scripted list of shepherd moves one
//! turn each, then lets the world run on its own for a while.  Each turn's
//! messages are printed as it ends; the grid is printed at the start, after
//! the scripted moves, and once the run is over.
//!
//! Set `RUST_LOG=sh_behavior=debug` to see misses, whiffs and blocked moves.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use sh_core::{Point, SimConfig, Tick};
use sh_entity::Kind;
use sh_sim::{SimBuilder, SimObserver};
use sh_world::Legend;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 2024;
const TURN_TICKS:  u64 = 10;
const IDLE_TURNS:  u64 = 12;

const MEADOW: &[&str] = &[
    "OOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOO",
    "O\"\"                                    O",
    "O\"\"\"\"                                  O",
    "O\"\"\"  h                                O",
    "O\"  \"             @                    O",
    "O   h }                                O",
    "O     \" \"                              O",
    "O  \"\"\" \"\"                              O",
    "O     \"\"\"                              O",
    "O     \"\"\"          \"                   O",
    "O     \"\"\"                              O",
    "O     \"\"\"                              O",
    "O     \"\"\"                              O",
    "O     \"\"\"                              O",
    "O     \"\"\"                              O",
    "O     \"\"\"                              O",
    "O     \"\"\"                              O",
    "O     \"\"\"                              O",
    "O     \"\"\"                              O",
    "OOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOO",
];

/// The shepherd wanders west toward the flock, then south along the grass.
const SCRIPT: &[(i32, i32)] = &[
    (-1, 0), (-1, 0), (-1, 0), (-1, 0), (-1, 0),
    (-1, 1), (-1, 1), (-1, 0), (-1, 0), (-1, 0),
    (0, 1), (0, 1), (0, 1), (1, 1), (1, 0),
];

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints every message with the tick of the turn that produced it.
struct Narrator {
    lines: usize,
}

impl SimObserver for Narrator {
    fn on_turn_end(&mut self, tick: Tick, messages: &[String]) {
        for message in messages {
            println!("  [{tick}] {message}");
        }
        self.lines += messages.len();
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        tracing::info!(%final_tick, messages = self.lines, "meadow finished");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meadow=info")),
        )
        .init();

    let legend = Legend::new()
        .with('O', Kind::StonePillar)
        .with('"', Kind::Grass)
        .with('h', Kind::WanderingShrub)
        .with('}', Kind::GluttonousShambler)
        .with('@', Kind::Player);

    let config = SimConfig {
        seed:        SEED,
        turn_ticks:  TURN_TICKS,
        total_ticks: (SCRIPT.len() as u64 + IDLE_TURNS) * TURN_TICKS,
    };
    let mut sim = SimBuilder::new(config).map(&legend, &[MEADOW]).build()?;
    let mut narrator = Narrator { lines: 0 };

    println!("=== meadow — seed {SEED} ===");
    print_grid(&sim.world.display_rows());

    for &(dx, dy) in SCRIPT {
        sim.player_turn(Point::new(dx, dy), &mut narrator)?;
    }
    println!();
    println!("After {} scripted turns ({}):", SCRIPT.len(), sim.clock);
    print_grid(&sim.world.display_rows());

    sim.run(&mut narrator)?;
    println!();
    println!("After {IDLE_TURNS} idle turns ({}):", sim.clock);
    print_grid(&sim.world.display_rows());

    match sim.world.player() {
        Some(shepherd) => print!("{}", shepherd.state()),
        None => println!("The shepherd is gone."),
    }
    Ok(())
}

fn print_grid(rows: &[String]) {
    for row in rows {
        println!("{row}");
    }
}
