use crate::apple::Apple;
use crate::grid::{Cell, Grid};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn velocity(self) -> Cell {
        match self {
            Direction::Up => Cell::new(-1, 0),
            Direction::Down => Cell::new(1, 0),
            Direction::Left => Cell::new(0, -1),
            Direction::Right => Cell::new(0, 1),
        }
    }
}

/// Applies a directional input to the current velocity. A horizontal turn
/// is only taken while the column component is zero, a vertical turn only
/// while the row component is zero, which rules out instant 180° reversal
/// into the neck.
pub fn steer(velocity: Cell, input: Direction) -> Cell {
    match input {
        Direction::Left | Direction::Right if velocity.col == 0 => input.velocity(),
        Direction::Up | Direction::Down if velocity.row == 0 => input.velocity(),
        _ => velocity,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { ate: bool },
    Crashed,
}

/// The snake's body, head first, tail last. Consecutive cells are always
/// cardinal neighbors modulo the grid size.
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// The starting body: three cells on the top row, heading right.
    pub fn new() -> Self {
        Snake {
            body: vec![Cell::new(0, 6), Cell::new(0, 5), Cell::new(0, 4)],
        }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Advances the whole body one step. Every non-head segment takes its
    /// forward neighbor's old position, then the new head is computed from
    /// the velocity and wrapped per axis. Self-collision compares the new
    /// head against the shifted body, so the just-vacated tail cell never
    /// counts as a crash.
    pub fn step(&mut self, velocity: Cell, apple: &mut Apple, grid: Grid) -> StepOutcome {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        let head = grid.wrap_cell(self.body[0] + velocity);
        self.body[0] = head;

        if self.body[1..].contains(&head) {
            return StepOutcome::Crashed;
        }

        let ate = apple.is_at(head);
        if ate {
            *apple = Apple::Eaten;
        }

        StepOutcome::Moved { ate }
    }

    /// Appends one tail segment by extrapolating the last step: the new
    /// tail continues the line from the second-to-last segment through the
    /// last one, wrapped onto the grid.
    pub fn grow(&mut self, grid: Grid) {
        let last = self.body[self.body.len() - 1];
        let second_last = self.body[self.body.len() - 2];
        self.body.push(grid.wrap_cell(last + (last - second_last)));
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(cells.len() >= 2);
        Snake { body: cells }
    }
}
