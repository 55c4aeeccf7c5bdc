//! Plain-text frames for terminal output.

use crate::domain::{OutOfBoundsError, Universe};

pub const ALIVE: char = '#';
pub const DEAD: char = '.';

/// One line per row, top row first, each ending in a newline
pub fn render_frame(universe: &Universe) -> Result<String, OutOfBoundsError> {
    let (width, height) = universe.dimensions();
    let mut frame = String::with_capacity((width + 1) * height);

    for (x, _, cell) in universe.cells()? {
        frame.push(if cell.is_alive() { ALIVE } else { DEAD });
        if x + 1 == width {
            frame.push('\n');
        }
    }

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_frame_layout() {
        let mut universe = Universe::new();
        universe.set_size(2, 3).set_initial_pattern([(0, 0), (2, 1)]).init();
        assert_eq!(render_frame(&universe).unwrap(), "#..\n..#\n");
    }

    #[test]
    fn test_render_before_init_fails() {
        let mut universe = Universe::new();
        universe.set_size(2, 2);
        assert_eq!(render_frame(&universe), Err(OutOfBoundsError::Uninitialized));
    }
}
