/// Cell is a single unit of the universe, either alive or dead.
/// It has no knowledge of the grid it lives in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    /// Create a cell with the given initial state
    pub const fn new(alive: bool) -> Self {
        Self { alive }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Move the cell to its next state given the number of live neighbors.
    pub fn apply_rule(&mut self, live_neighbors: u8) {
        self.alive = next_state(self.alive, live_neighbors);
    }
}

/// Pure Conway transition (B3/S23):
/// 1. Live cell with fewer than 2 neighbors dies (underpopulation)
/// 2. Live cell with 2-3 neighbors survives
/// 3. Live cell with more than 3 neighbors dies (overcrowding)
/// 4. Dead cell with exactly 3 neighbors becomes alive (reproduction)
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2 | 3) | (false, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evolved(alive: bool, neighbors: u8) -> bool {
        let mut cell = Cell::new(alive);
        cell.apply_rule(neighbors);
        cell.is_alive()
    }

    #[test]
    fn test_underpopulation() {
        assert!(!evolved(true, 0));
        assert!(!evolved(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(evolved(true, 2));
        assert!(evolved(true, 3));
    }

    #[test]
    fn test_overcrowding() {
        for n in 4..=8 {
            assert!(!evolved(true, n), "alive cell with {n} neighbors should die");
        }
    }

    #[test]
    fn test_reproduction() {
        assert!(evolved(false, 3));
    }

    #[test]
    fn test_dead_stays_dead_without_three() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert!(!evolved(false, n), "dead cell with {n} neighbors should stay dead");
        }
    }

    #[test]
    fn test_method_matches_free_function() {
        for alive in [true, false] {
            for n in 0..=8 {
                assert_eq!(evolved(alive, n), next_state(alive, n));
            }
        }
    }

    #[test]
    fn test_default_is_dead() {
        assert!(!Cell::default().is_alive());
        assert_eq!(Cell::default(), Cell::new(false));
    }
}
