use super::Cell;

/// Grid manages the 2D cellular automaton grid.
/// The grid is a torus: neighbor lookups wrap around both edges.
/// Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions as (nx, ny)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Out-of-bounds reads as dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out-of-bounds is a no-op
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell at position; out-of-bounds is a no-op
    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.get(x, y) {
            self.set(x, y, cell.toggle());
        }
    }

    /// Force the cell alive. Idempotent, used for drag painting.
    pub fn set_alive(&mut self, x: usize, y: usize) {
        self.set(x, y, Cell::Alive);
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as isize;
        let h = self.height as isize;

        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x as isize + dx).rem_euclid(w) as usize;
                let ny = (y as isize + dy).rem_euclid(h) as usize;
                if self.cells[self.get_index(nx, ny)].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Compute the next generation into a brand-new grid.
    /// The current grid is only read, so every cell sees the same generation.
    pub fn step(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let current = self.cells[self.get_index(x, y)];
                cells.push(current.evolve(self.count_live_neighbors(x, y)));
            }
        }

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}
