use crate::errors::GridError;

/// Grid cell address as (row, col)
/// Hashable so it can key the node maps used by the searches
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Manhattan distance between two cells
/// Admissible and consistent on a 4-connected unit-cost grid
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}

/// Fixed-size 2D occupancy field
/// Cells are stored in a single row-major buffer, true = walkable
/// Immutable once constructed - searches only ever read it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {

    /// Build a grid from row data, true = walkable
    /// Every row must have the same length
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyGrid);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { rows: rows.len(), cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether a cell can be entered
    /// Fails closed: any out-of-bounds coordinate is reported as not walkable
    /// This is the single validity gate applied before expanding a neighbor
    pub fn is_walkable(&self, c: Coord) -> bool {
        c.row < self.rows && c.col < self.cols && self.cells[c.row * self.cols + c.col]
    }

    /// Walkable orthogonal neighbors in fixed order: up, down, left, right
    /// wrapping_sub at the edge produces usize::MAX which is_walkable rejects
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        [
            Coord::new(c.row.wrapping_sub(1), c.col), // up
            Coord::new(c.row + 1, c.col),             // down
            Coord::new(c.row, c.col.wrapping_sub(1)), // left
            Coord::new(c.row, c.col + 1),             // right
        ]
        .into_iter()
        .filter(|&n| self.is_walkable(n))
    }
}
