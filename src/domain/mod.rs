mod cell;
mod error;
mod universe;
mod patterns;

pub use cell::{Cell, next_state};
pub use error::OutOfBoundsError;
pub use universe::Universe;
pub use patterns::{Pattern, presets, random};
