use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// The apple is either on the board or eaten and awaiting replacement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Apple {
    Placed(Cell),
    Eaten,
}

impl Apple {
    pub fn is_at(&self, cell: Cell) -> bool {
        matches!(self, Apple::Placed(c) if *c == cell)
    }

    pub fn cell(&self) -> Option<Cell> {
        match self {
            Apple::Placed(c) => Some(*c),
            Apple::Eaten => None,
        }
    }

    /// Rejection-samples a cell not occupied by the body. Returns `None`
    /// when the body already fills the grid; callers check the win
    /// condition first, so that case should never be hit in play.
    pub fn spawn<R: Rng>(rng: &mut R, snake: &Snake, grid: Grid) -> Option<Cell> {
        if snake.len() >= grid.cell_count() {
            return None;
        }

        loop {
            let cell = Cell::new(
                rng.gen_range(0..grid.height),
                rng.gen_range(0..grid.width),
            );
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_never_lands_on_the_body() {
        let grid = Grid::new(8, 8);
        let mut rng = StdRng::seed_from_u64(0xA99);

        // A few body shapes, from the starting snake to a near-full grid.
        let straight = Snake::new();
        let hook = Snake::from_cells(vec![
            Cell::new(2, 2),
            Cell::new(2, 3),
            Cell::new(3, 3),
            Cell::new(4, 3),
            Cell::new(4, 2),
            Cell::new(4, 1),
        ]);
        let mut dense_cells = vec![];
        for row in 0..8 {
            for col in 0..8 {
                let col = if row % 2 == 0 { col } else { 7 - col };
                dense_cells.push(Cell::new(row, col));
            }
        }
        dense_cells.truncate(63); // one free cell left
        let dense = Snake::from_cells(dense_cells);

        for snake in &[straight, hook, dense] {
            for _ in 0..10_000 {
                let cell = Apple::spawn(&mut rng, snake, grid).unwrap();
                assert!(grid.contains(cell));
                assert!(!snake.occupies(cell));
            }
        }
    }

    #[test]
    fn spawn_on_a_full_grid_yields_none() {
        let grid = Grid::new(8, 8);
        let mut cells = vec![];
        for row in 0..8 {
            for col in 0..8 {
                let col = if row % 2 == 0 { col } else { 7 - col };
                cells.push(Cell::new(row, col));
            }
        }
        let snake = Snake::from_cells(cells);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Apple::spawn(&mut rng, &snake, grid), None);
    }
}
