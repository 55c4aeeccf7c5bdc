mod config;
mod simulation;

pub use config::{ConfigError, DEFAULT_DENSITY, LifeConfig, PatternKind};
pub use simulation::Simulation;
