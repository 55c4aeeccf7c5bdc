use rand::Rng;

/// A named seed shape, stored as alive coordinates relative to its top-left corner
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        let width = cells.iter().map(|&(x, _)| x.saturating_add(1)).max().unwrap_or(0).max(0) as usize;
        let height = cells.iter().map(|&(_, y)| y.saturating_add(1)).max().unwrap_or(0).max(0) as usize;
        Self { name, description, width, height, cells }
    }

    /// Absolute coordinates of the pattern placed with its corner at (x, y),
    /// ready for `Universe::set_initial_pattern`. Cells whose position does
    /// not fit in an `i64` are dropped; they could never land on a grid.
    pub fn at(&self, x: i64, y: i64) -> Vec<(i64, i64)> {
        self.cells
            .iter()
            .filter_map(|&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
            .collect()
    }

    /// Corner position that centers the pattern in a `width` x `height` grid
    pub fn centered_in(&self, width: usize, height: usize) -> (i64, i64) {
        (
            (width as i64 - self.width as i64) / 2,
            (height as i64 - self.height as i64) / 2,
        )
    }
}

/// Random soup: each position of a `width` x `height` grid is alive with
/// probability `density`, clamped to [0, 1]. A NaN density seeds nothing.
pub fn random<R: Rng>(width: usize, height: usize, density: f64, rng: &mut R) -> Vec<(i64, i64)> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    (0..height as i64)
        .flat_map(|y| (0..width as i64).map(move |x| (x, y)))
        .filter(|_| rng.random_bool(density))
        .collect()
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - methuselah, needs a large grid to show its full run
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            vec![
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
                (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3),
                (0, 4), (5, 4), (7, 4), (12, 4),
                (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
                (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                (0, 8), (5, 8), (7, 8), (12, 8),
                (0, 9), (5, 9), (7, 9), (12, 9),
                (0, 10), (5, 10), (7, 10), (12, 10),
                (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            lwss(),
            r_pentomino(),
            pulsar(),
        ]
    }
}
