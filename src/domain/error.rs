//! Error raised when the universe is read outside its bounds or before it
//! has been seeded.

use thiserror::Error;

/// Contract violation on the universe grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutOfBoundsError {
    /// Coordinates fall outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} universe")]
    Coordinates {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// The grid has no cells yet: `init` was never called, or the universe
    /// was resized afterwards.
    #[error("universe is not initialized; call init() after set_size()")]
    Uninitialized,
}
