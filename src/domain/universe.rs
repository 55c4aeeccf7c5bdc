use std::collections::HashSet;

use super::{Cell, OutOfBoundsError};

/// Relative positions of the Moore neighborhood, center excluded.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Universe owns a bounded rectangular grid of cells.
///
/// Lifecycle: `new` (0x0, no cells) -> `set_size` (dimensions fixed, no cells)
/// -> `init` (generation 0) -> `next_generation` ... Calling `set_size` again
/// drops the grid and requires another `init`.
///
/// Edges are hard: neighbors outside the grid are skipped, never wrapped.
#[derive(Clone, Debug, Default)]
pub struct Universe {
    width: usize,
    height: usize,
    /// Row-major cells, `None` until `init` has run
    space: Option<Vec<Cell>>,
    initial_pattern: Vec<(i64, i64)>,
    generation: u64,
}

impl Universe {
    /// Create an empty, unsized universe
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the grid dimensions. Any existing cells are discarded.
    pub fn set_size(&mut self, height: usize, width: usize) -> &mut Self {
        self.width = width;
        self.height = height;
        self.space = None;
        self.generation = 0;
        self
    }

    /// Store the coordinates that start alive. Only read by the next `init`;
    /// coordinates outside the grid are ignored there.
    pub fn set_initial_pattern<I>(&mut self, pattern: I) -> &mut Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        self.initial_pattern = pattern.into_iter().collect();
        self
    }

    /// Create a cell for every position, alive iff it is in the stored pattern.
    /// Re-running this discards all generations computed so far.
    pub fn init(&mut self) -> &mut Self {
        let seeded: HashSet<(i64, i64)> = self.initial_pattern.iter().copied().collect();
        let width = self.width;

        let cells: Vec<Cell> = (0..self.height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| Cell::new(seeded.contains(&(x as i64, y as i64))))
            .collect();

        self.space = Some(cells);
        self.generation = 0;
        self
    }

    /// Advance every cell by one generation.
    ///
    /// Neighbor counts are all taken from the current grid; the next grid is
    /// built separately and swapped in, so readers only ever see a complete
    /// generation.
    pub fn next_generation(&mut self) -> Result<&mut Self, OutOfBoundsError> {
        let space = self.space()?;

        let next: Vec<Cell> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let mut cell = space[self.index(x, y)];
                cell.apply_rule(self.count_live_neighbors(space, x, y));
                cell
            })
            .collect();

        self.space = Some(next);
        self.generation += 1;
        Ok(self)
    }

    /// Iterate over `(x, y, cell)` in row-major order.
    /// Each call starts a fresh pass over the current generation.
    pub fn cells(&self) -> Result<impl Iterator<Item = (usize, usize, Cell)> + '_, OutOfBoundsError> {
        let space = self.space()?;
        let width = self.width;

        Ok(space
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx % width, idx / width, *cell)))
    }

    /// Bounds-checked cell lookup
    pub fn cell_at(&self, x: usize, y: usize) -> Result<Cell, OutOfBoundsError> {
        let space = self.space()?;
        self.check_bounds(x, y)?;
        Ok(space[self.index(x, y)])
    }

    /// Number of alive cells among the in-bounds Moore neighbors of `(x, y)`
    pub fn live_neighbors(&self, x: usize, y: usize) -> Result<u8, OutOfBoundsError> {
        let space = self.space()?;
        self.check_bounds(x, y)?;
        Ok(self.count_live_neighbors(space, x, y))
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn is_initialized(&self) -> bool {
        self.space.is_some()
    }

    /// Generations computed since the last `init`
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Count of alive cells
    pub fn population(&self) -> Result<usize, OutOfBoundsError> {
        Ok(self.space()?.iter().filter(|cell| cell.is_alive()).count())
    }

    /// Coordinates of alive cells in row-major order
    pub fn alive_cells(&self) -> Result<Vec<(usize, usize)>, OutOfBoundsError> {
        Ok(self
            .cells()?
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect())
    }

    fn space(&self) -> Result<&[Cell], OutOfBoundsError> {
        self.space.as_deref().ok_or(OutOfBoundsError::Uninitialized)
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), OutOfBoundsError> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(OutOfBoundsError::Coordinates {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Offsets that leave the grid are skipped, so corners see at most 3
    /// neighbors and edges at most 5.
    fn count_live_neighbors(&self, space: &[Cell], x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx).filter(|&nx| nx < self.width)?;
                let ny = y.checked_add_signed(dy).filter(|&ny| ny < self.height)?;
                Some(space[self.index(nx, ny)])
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }
}
