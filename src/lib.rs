// Domain layer - Core business logic
pub mod domain;

// Application layer - Configuration and simulation driving
pub mod application;

// Infrastructure layer - rendering
pub mod rendering;

// Re-exports for convenience
pub use domain::{Cell, OutOfBoundsError, Pattern, Universe, presets};
pub use application::{LifeConfig, PatternKind, Simulation};
