use sh_core::WorldError;
use sh_world::LegendError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("map error: {0}")]
    Legend(#[from] LegendError),
}

pub type SimResult<T> = Result<T, SimError>;
