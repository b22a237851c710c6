use std::ops::{Add, Sub};

use crate::GridInt;

/// One cell of the play field, (row, col).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: GridInt,
    pub col: GridInt,
}

impl Cell {
    pub const fn new(row: GridInt, col: GridInt) -> Self {
        Cell { row, col }
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// The wrapped rectangle the snake lives on. Moving past one edge
/// reenters at the opposite edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: GridInt,
    pub height: GridInt,
}

/// Terminal columns taken by one grid cell.
pub const BLOCK_WIDTH: i32 = 3;
/// Terminal rows taken by one grid cell.
pub const BLOCK_HEIGHT: i32 = 1;

impl Grid {
    pub const fn new(width: GridInt, height: GridInt) -> Self {
        Grid { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.height).contains(&cell.row) && (0..self.width).contains(&cell.col)
    }

    /// Single-step wraparound: values are at most one step out of range.
    pub fn wrap(value: GridInt, bound: GridInt) -> GridInt {
        if value < 0 {
            bound - 1
        } else if value > bound - 1 {
            0
        } else {
            value
        }
    }

    pub fn wrap_cell(&self, cell: Cell) -> Cell {
        Cell::new(
            Self::wrap(cell.row, self.height),
            Self::wrap(cell.col, self.width),
        )
    }

    /// Normalizes `a - b` to {-1, 0, 1} for cells known to be adjacent on
    /// this axis. A magnitude above 1 means the pair straddles the wrap
    /// seam, so the true step went the other way (+7 on an 8-wide axis
    /// is really -1).
    pub fn signed_delta(a: GridInt, b: GridInt) -> GridInt {
        let d = a - b;
        if d > 1 {
            -1
        } else if d < -1 {
            1
        } else {
            d
        }
    }

    /// Maps a grid cell to a terminal position, centering the grid in the
    /// current window. The window size changes between ticks, so callers
    /// recompute this on every draw.
    pub fn to_screen(&self, cell: Cell, term_cols: u16, term_rows: u16) -> (u16, u16) {
        let x = cell.col as i32 * BLOCK_WIDTH + term_cols as i32 / 2 - self.width as i32 / 2;
        let y = cell.row as i32 * BLOCK_HEIGHT + term_rows as i32 / 2 - self.height as i32 / 2;
        (x.max(0) as u16, y.max(0) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_is_identity_in_range() {
        for v in 0..8 {
            assert_eq!(Grid::wrap(v, 8), v);
        }
    }

    #[test]
    fn wrap_triggers_only_at_boundaries() {
        assert_eq!(Grid::wrap(-1, 8), 7);
        assert_eq!(Grid::wrap(8, 8), 0);
    }

    #[test]
    fn signed_delta_normalizes_wrapped_steps() {
        assert_eq!(Grid::signed_delta(3, 3), 0);
        assert_eq!(Grid::signed_delta(4, 3), 1);
        assert_eq!(Grid::signed_delta(3, 4), -1);
        // Column 7 next to column 0 on an 8-wide grid, both directions.
        assert_eq!(Grid::signed_delta(7, 0), -1);
        assert_eq!(Grid::signed_delta(0, 7), 1);
    }

    #[test]
    fn cell_arithmetic_is_componentwise() {
        let a = Cell::new(1, 2);
        let b = Cell::new(3, 5);
        assert_eq!(a + b, Cell::new(4, 7));
        assert_eq!(b - a, Cell::new(2, 3));
    }

    #[test]
    fn screen_transform_centers_and_clamps() {
        let grid = Grid::new(8, 8);
        let (x, y) = grid.to_screen(Cell::new(0, 0), 80, 24);
        assert_eq!((x, y), (36, 8));
        // A terminal smaller than the grid must not underflow.
        let (x, y) = grid.to_screen(Cell::new(0, 0), 2, 2);
        assert_eq!((x, y), (0, 0));
    }
}
