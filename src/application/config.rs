//! Run configuration shared by the viewer and the terminal driver.

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;

use crate::domain::{Pattern, presets, random};

/// Alive probability used when randomizing without an explicit density
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Seed patterns selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum PatternKind {
    #[default]
    Glider,
    Blinker,
    Toad,
    Beacon,
    Block,
    Lwss,
    RPentomino,
    Pulsar,
}

impl PatternKind {
    pub fn pattern(self) -> Pattern {
        match self {
            PatternKind::Glider => presets::glider(),
            PatternKind::Blinker => presets::blinker(),
            PatternKind::Toad => presets::toad(),
            PatternKind::Beacon => presets::beacon(),
            PatternKind::Block => presets::block(),
            PatternKind::Lwss => presets::lwss(),
            PatternKind::RPentomino => presets::r_pentomino(),
            PatternKind::Pulsar => presets::pulsar(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("random density must be within [0, 1], got {0}")]
    Density(f64),

    #[error("speed must be within [1, 60] generations per second, got {0}")]
    Speed(f32),
}

/// Run Conway's Game of Life on a bounded grid.
#[derive(Parser, Debug, Clone)]
#[command(name = "life", about = "Conway's Game of Life on a bounded grid")]
pub struct LifeConfig {
    /// Grid width in cells
    #[arg(long, default_value_t = 25)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Seed pattern
    #[arg(long, value_enum, default_value_t = PatternKind::Glider)]
    pub pattern: PatternKind,

    /// Column of the pattern's top-left corner (default: centered)
    #[arg(long, allow_hyphen_values = true)]
    pub origin_x: Option<i64>,

    /// Row of the pattern's top-left corner (default: centered)
    #[arg(long, allow_hyphen_values = true)]
    pub origin_y: Option<i64>,

    /// Seed a random soup with this alive probability instead of a pattern
    #[arg(long, value_name = "DENSITY")]
    pub random: Option<f64>,

    /// RNG seed for reproducible random soups
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many generations (0 runs forever)
    #[arg(long, default_value_t = 0)]
    pub generations: u64,

    /// Generations per second
    #[arg(long, default_value_t = 10.0)]
    pub speed: f32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            pattern: PatternKind::Glider,
            origin_x: None,
            origin_y: None,
            random: None,
            seed: None,
            generations: 0,
            speed: 10.0,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid { width: self.width, height: self.height });
        }
        if let Some(density) = self.random.filter(|d| !(0.0..=1.0).contains(d)) {
            return Err(ConfigError::Density(density));
        }
        if !(1.0..=60.0).contains(&self.speed) {
            return Err(ConfigError::Speed(self.speed));
        }
        Ok(())
    }

    /// RNG for random soups, fixed when `--seed` is given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Density used by randomize actions
    pub fn density(&self) -> f64 {
        self.random.unwrap_or(DEFAULT_DENSITY)
    }

    /// Absolute alive coordinates for the configured seed
    pub fn seed_pattern<R: Rng>(&self, rng: &mut R) -> Vec<(i64, i64)> {
        if let Some(density) = self.random {
            return random(self.width, self.height, density, rng);
        }

        let pattern = self.pattern.pattern();
        let (cx, cy) = pattern.centered_in(self.width, self.height);
        pattern.at(self.origin_x.unwrap_or(cx), self.origin_y.unwrap_or(cy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let parsed = LifeConfig::parse_from(["life"]);
        let default = LifeConfig::default();
        assert_eq!(parsed.width, default.width);
        assert_eq!(parsed.height, default.height);
        assert_eq!(parsed.pattern, default.pattern);
        assert_eq!(parsed.speed, default.speed);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_parse_pattern_and_origin() {
        let config = LifeConfig::parse_from([
            "life", "--pattern", "r-pentomino", "--origin-x", "-1", "--origin-y", "3",
        ]);
        assert_eq!(config.pattern, PatternKind::RPentomino);
        assert_eq!((config.origin_x, config.origin_y), (Some(-1), Some(3)));
    }

    #[test]
    fn test_origin_reproduces_classic_glider() {
        let config = LifeConfig {
            origin_x: Some(12),
            origin_y: Some(12),
            ..LifeConfig::default()
        };
        assert_eq!(
            config.seed_pattern(&mut config.rng()),
            vec![(13, 12), (14, 13), (12, 14), (13, 14), (14, 14)]
        );
    }

    #[test]
    fn test_extreme_origin_seeds_without_overflow() {
        let config = LifeConfig {
            origin_x: Some(i64::MAX),
            origin_y: Some(0),
            ..LifeConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.seed_pattern(&mut config.rng()), vec![(i64::MAX, 2)]);

        let config = LifeConfig {
            origin_x: Some(i64::MIN),
            origin_y: Some(i64::MAX),
            ..LifeConfig::default()
        };
        let mut universe = crate::Universe::new();
        universe
            .set_size(config.height, config.width)
            .set_initial_pattern(config.seed_pattern(&mut config.rng()))
            .init();
        assert_eq!(universe.population().unwrap(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty = LifeConfig { width: 0, ..LifeConfig::default() };
        assert_eq!(empty.validate(), Err(ConfigError::EmptyGrid { width: 0, height: 25 }));

        let dense = LifeConfig { random: Some(1.5), ..LifeConfig::default() };
        assert_eq!(dense.validate(), Err(ConfigError::Density(1.5)));

        let fast = LifeConfig { speed: 0.0, ..LifeConfig::default() };
        assert_eq!(fast.validate(), Err(ConfigError::Speed(0.0)));
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let config = LifeConfig { random: Some(0.4), seed: Some(9), ..LifeConfig::default() };
        assert_eq!(config.seed_pattern(&mut config.rng()), config.seed_pattern(&mut config.rng()));
    }
}
