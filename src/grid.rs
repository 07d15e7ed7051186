use std::fmt;

use rand::Rng;

use crate::cell::Cell;
use crate::error::GridError;
use crate::rule_set::RuleSet;
use crate::seed::SeedPolicy;

/// Offsets of the Moore neighborhood, in enumeration order:
/// left, right, up, down, up-left, up-right, down-left, down-right.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// A fixed size board of [`Cell`]s.
///
/// The grid does not wrap around: cells on the border simply have fewer neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,

    /// All cells, stored in construction order. The cell at `(x, y)` lives at `x * height + y`.
    cells: Vec<Cell>,

    /// Birth and survival rules evaluated by [`Grid::advance`]
    rules: RuleSet,

    /// Number of times the grid has been advanced
    generation: u64,
}

impl Grid {
    /// Create a new grid seeded according to `policy`, drawing randomness from `rng`.
    pub fn new<R>(
        width: usize,
        height: usize,
        policy: SeedPolicy,
        rng: &mut R,
    ) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        policy.validate()?;

        Self::from_fn(width, height, |_, _| policy.sample(rng))
    }

    /// Create a grid where every cell is dead.
    pub fn empty(width: usize, height: usize) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_, _| false)
    }

    /// Create a grid where the cell at `(x, y)` starts alive iff `f(x, y)`.
    ///
    /// `f` is called exactly once per cell, for increasing `x` and, within each `x`, increasing
    /// `y`.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let len = width.checked_mul(height).filter(|&len| len > 0);
        let Some(len) = len else {
            return Err(GridError::InvalidDimension { width, height });
        };

        let mut cells = Vec::with_capacity(len);

        for x in 0..width {
            for y in 0..height {
                cells.push(Cell::new(x, y, f(x, y)));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
            rules: RuleSet::default(),
            generation: 0,
        })
    }

    /// Create a grid where exactly the listed coordinates start alive.
    pub fn from_live_cells(
        width: usize,
        height: usize,
        live: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::empty(width, height)?;

        for &(x, y) in live {
            let i = grid.checked_index(x, y)?;
            grid.cells[i] = Cell::new(x, y, true);
        }

        Ok(grid)
    }

    /// Evaluate `rules` instead of B3/S23.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` lies outside of the grid. Use [`Grid::try_get_cell`] for a fallible lookup.
    pub fn get_cell(&self, x: usize, y: usize) -> &Cell {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) is outside of the {}x{} grid",
            self.width,
            self.height
        );

        &self.cells[self.index(x, y)]
    }

    pub fn try_get_cell(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        let i = self.checked_index(x, y)?;

        Ok(&self.cells[i])
    }

    /// Shorthand for `get_cell(x, y).is_alive()`.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get_cell(x, y).is_alive()
    }

    /// Iterate over every cell, in construction order.
    pub fn cells(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Coordinates of every living cell, in construction order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(Cell::pos)
    }

    /// Number of living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// The cells adjacent to `cell`, horizontally, vertically and diagonally. Positions outside
    /// of the grid are skipped, so corners have 3 neighbors, edges 5 and everything else 8.
    pub fn neighbors(&self, cell: &Cell) -> Neighbors<'_> {
        Neighbors {
            grid: self,
            x: cell.x(),
            y: cell.y(),
            next: 0,
        }
    }

    pub fn living_neighbors(&self, cell: &Cell) -> usize {
        self.neighbors(cell).filter(|n| n.is_alive()).count()
    }

    /// Moves the grid forward by one generation.
    pub fn advance(&mut self) {
        // Every next state is staged from the current generation before any of them is
        // committed. Committing in the same pass would let updated cells leak into their
        // neighbors' counts.
        for i in 0..self.cells.len() {
            let cell = &self.cells[i];
            let next = self
                .rules
                .next_state(cell.is_alive(), self.living_neighbors(cell));

            self.cells[i].stage(next);
        }

        for cell in &mut self.cells {
            cell.commit();
        }

        self.generation += 1;
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.index(x, y))
    }
}

/// Renders the grid row by row, `O` for living cells and `.` for dead ones.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = if self.is_alive(x, y) { 'O' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Iterator returned by [`Grid::neighbors`]
pub struct Neighbors<'a> {
    grid: &'a Grid,
    x: usize,
    y: usize,

    /// Index of the next offset to try in `NEIGHBOR_OFFSETS`
    next: usize,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy)) = NEIGHBOR_OFFSETS.get(self.next) {
            self.next += 1;

            let (Some(x), Some(y)) = (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy))
            else {
                continue;
            };

            if self.grid.contains(x, y) {
                return Some(self.grid.get_cell(x, y));
            }
        }

        None
    }
}
