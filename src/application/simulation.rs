use std::time::Instant;

use rand::rngs::StdRng;

use crate::domain::{OutOfBoundsError, Universe, random};

use super::{ConfigError, LifeConfig};

/// Simulation drives a universe: it seeds it from the configuration and
/// paces generations against wall-clock time.
pub struct Simulation {
    pub universe: Universe,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32, // Evolution performance metric
    density: f64,
    rng: StdRng,
}

impl Simulation {
    /// Build and seed a universe from a validated configuration
    pub fn new(config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = config.rng();
        let mut universe = Universe::new();
        universe
            .set_size(config.height, config.width)
            .set_initial_pattern(config.seed_pattern(&mut rng))
            .init();

        Ok(Self {
            universe,
            is_running: false,
            update_timer: 0.0,
            updates_per_second: config.speed,
            last_evolution_time_ms: 0.0,
            density: config.density(),
            rng,
        })
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Re-seed from the stored pattern, back to generation 0
    pub fn restart(mut self) -> Self {
        self.universe.init();
        self.is_running = false;
        self
    }

    /// Replace the seed with a fresh random soup and restart
    pub fn randomize(mut self) -> Self {
        let (width, height) = self.universe.dimensions();
        let soup = random(width, height, self.density, &mut self.rng);
        self.universe.set_initial_pattern(soup).init();
        self.is_running = false;
        self
    }

    /// Advance exactly one generation, recording how long it took
    pub fn step(&mut self) -> Result<(), OutOfBoundsError> {
        let start = Instant::now();
        self.universe.next_generation()?;
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        Ok(())
    }

    /// Update simulation by one frame. Returns whether a generation was computed.
    pub fn tick(&mut self, delta_time: f32) -> Result<bool, OutOfBoundsError> {
        if !self.is_running {
            return Ok(false);
        }

        self.update_timer += delta_time;
        if self.update_timer < 1.0 / self.updates_per_second {
            return Ok(false);
        }

        self.step()?;
        self.update_timer = 0.0;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker_config() -> LifeConfig {
        LifeConfig {
            width: 5,
            height: 5,
            pattern: crate::application::PatternKind::Blinker,
            ..LifeConfig::default()
        }
    }

    #[test]
    fn test_new_seeds_generation_zero() {
        let sim = Simulation::new(&blinker_config()).unwrap();
        assert_eq!(sim.universe.generation(), 0);
        assert_eq!(sim.universe.alive_cells().unwrap(), vec![(1, 2), (2, 2), (3, 2)]);
        assert!(!sim.is_running);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = LifeConfig { height: 0, ..LifeConfig::default() };
        assert!(Simulation::new(&config).is_err());
    }

    #[test]
    fn test_tick_paused_does_nothing() {
        let mut sim = Simulation::new(&blinker_config()).unwrap();
        assert!(!sim.tick(10.0).unwrap());
        assert_eq!(sim.universe.generation(), 0);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut sim = Simulation::new(&blinker_config()).unwrap().with_running(true);
        // 10 generations per second: 0.06s is not enough, 0.06 + 0.06 is
        assert!(!sim.tick(0.06).unwrap());
        assert!(sim.tick(0.06).unwrap());
        assert_eq!(sim.universe.generation(), 1);
        assert_eq!(sim.update_timer, 0.0);
    }

    #[test]
    fn test_adjust_speed_clamps() {
        let sim = Simulation::new(&blinker_config()).unwrap();
        let sim = sim.adjust_speed(100.0);
        assert_eq!(sim.updates_per_second, 60.0);
        let sim = sim.adjust_speed(-100.0);
        assert_eq!(sim.updates_per_second, 1.0);
    }

    #[test]
    fn test_restart_returns_to_seed() {
        let mut sim = Simulation::new(&blinker_config()).unwrap().toggle_running();
        sim.step().unwrap();
        let sim = sim.restart();
        assert_eq!(sim.universe.generation(), 0);
        assert_eq!(sim.universe.alive_cells().unwrap(), vec![(1, 2), (2, 2), (3, 2)]);
        assert!(!sim.is_running);
    }

    #[test]
    fn test_randomize_is_reproducible_with_seed() {
        let config = LifeConfig { seed: Some(3), random: Some(0.5), ..LifeConfig::default() };
        let a = Simulation::new(&config).unwrap().randomize();
        let b = Simulation::new(&config).unwrap().randomize();
        assert_eq!(a.universe.alive_cells().unwrap(), b.universe.alive_cells().unwrap());
        assert_eq!(a.universe.generation(), 0);
    }
}
