use std::thread::sleep;
use std::time::Duration;

use anyhow::Result;
use crossterm::style::Color;
use log::{info, trace};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::apple::Apple;
use crate::context::Ctx;
use crate::glyph::segment_glyph;
use crate::grid::{Cell, Grid};
use crate::snake::{steer, Direction, Snake, StepOutcome};
use crate::term::{glyph_str, Input, Term, APPLE_STR, BACKGROUND_STR};

/// The play field is a fixed wrapped rectangle.
pub const GRID: Grid = Grid::new(8, 8);

const MENU_FRAME_DELAY: Duration = Duration::from_millis(200);
const WIN_FRAME_DELAY: Duration = Duration::from_millis(150);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// Moves the selection one step toward Easy, clamping at the top.
    pub fn cycle_up(self) -> Level {
        match self {
            Level::Easy | Level::Medium => Level::Easy,
            Level::Hard => Level::Medium,
        }
    }

    /// Moves the selection one step toward Hard, clamping at the bottom.
    pub fn cycle_down(self) -> Level {
        match self {
            Level::Easy => Level::Medium,
            Level::Medium | Level::Hard => Level::Hard,
        }
    }

    pub fn tick_delay(self) -> Duration {
        match self {
            Level::Easy => Duration::from_millis(300),
            Level::Medium => Duration::from_millis(200),
            Level::Hard => Duration::from_millis(120),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Dead,
    Won,
}

/// One round's simulation state, independent of any terminal. The
/// interactive loop and the tests both drive it through `tick`.
pub struct Round {
    pub snake: Snake,
    pub apple: Apple,
    pub velocity: Cell,
    pub score: u32,
    pub grid: Grid,
}

impl Round {
    pub fn new<R: Rng>(rng: &mut R, grid: Grid) -> Self {
        let snake = Snake::new();
        let apple = match Apple::spawn(rng, &snake, grid) {
            Some(cell) => Apple::Placed(cell),
            None => Apple::Eaten,
        };

        Round {
            snake,
            apple,
            velocity: Cell::new(0, 1),
            score: 0,
            grid,
        }
    }

    /// Advances the round by one tick: steer, move, and on an eat grow
    /// the body, bump the score and respawn the apple. The win condition
    /// is checked right after the move (and after growth), so a full
    /// grid is reported on the triggering tick.
    pub fn tick<R: Rng>(&mut self, input: Input, rng: &mut R) -> TickOutcome {
        if let Some(dir) = direction_of(input) {
            self.velocity = steer(self.velocity, dir);
        }

        match self.snake.step(self.velocity, &mut self.apple, self.grid) {
            StepOutcome::Crashed => return TickOutcome::Dead,
            StepOutcome::Moved { ate: true } => {
                self.snake.grow(self.grid);
                self.score += 1;
                trace!("ate apple, score {}", self.score);

                if self.snake.len() >= self.grid.cell_count() {
                    return TickOutcome::Won;
                }
                match Apple::spawn(rng, &self.snake, self.grid) {
                    Some(cell) => self.apple = Apple::Placed(cell),
                    None => return TickOutcome::Won,
                }
            }
            StepOutcome::Moved { ate: false } => {
                if self.snake.len() >= self.grid.cell_count() {
                    return TickOutcome::Won;
                }
            }
        }

        TickOutcome::Continue
    }
}

fn direction_of(input: Input) -> Option<Direction> {
    match input {
        Input::Up => Some(Direction::Up),
        Input::Down => Some(Direction::Down),
        Input::Left => Some(Direction::Left),
        Input::Right => Some(Direction::Right),
        _ => None,
    }
}

enum RoundEnd {
    Dead,
    Won,
    Stopped,
}

/// The terminal-driving state machine: Menu -> Playing -> (Dead | Won)
/// -> Menu, looping until the stop flag is set.
pub struct Game<'a> {
    term: Term,
    ctx: &'a Ctx,
    level: Level,
    last_score: u32,
    rng: ThreadRng,
}

impl<'a> Game<'a> {
    pub fn new(term: Term, ctx: &'a Ctx) -> Self {
        Game {
            term,
            ctx,
            level: Level::Medium,
            last_score: 0,
            rng: rand::thread_rng(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        while !self.ctx.stop_requested() {
            if !self.menu()? {
                break;
            }

            match self.play_round()? {
                RoundEnd::Won => self.win_screen()?,
                RoundEnd::Dead | RoundEnd::Stopped => {}
            }
        }

        self.term.restore()
    }

    /// Level-select screen. Up/Down cycle the level with clamping at the
    /// extremes, Enter commits. The selection marker blinks on a frame
    /// counter, like the previous round's score line underneath.
    fn menu(&mut self) -> Result<bool> {
        let mut fr: u32 = 0;

        loop {
            if self.ctx.stop_requested() {
                return Ok(false);
            }

            match self.term.poll_input(self.ctx)? {
                Input::Up => {
                    self.level = self.level.cycle_up();
                    fr = 0;
                }
                Input::Down => {
                    self.level = self.level.cycle_down();
                    fr = 0;
                }
                Input::Confirm => {
                    info!("level {} selected", self.level.label());
                    return Ok(true);
                }
                _ => {}
            }

            if fr % 3 == 0 {
                let hide_marker = fr % 6 != 0;
                self.draw_menu(hide_marker)?;
            }

            fr = fr.wrapping_add(1);
            sleep(MENU_FRAME_DELAY);
        }
    }

    fn draw_menu(&mut self, hide_marker: bool) -> Result<()> {
        self.term.clear()?;
        self.term.print_centered(self.ctx, -2, "Select Level!")?;

        for (i, level) in [Level::Easy, Level::Medium, Level::Hard].iter().enumerate() {
            let marker = if *level == self.level && !hide_marker {
                " <"
            } else {
                ""
            };
            let line = format!("{: <8}{}", level.label(), marker);
            self.term.print_centered(self.ctx, i as i32, &line)?;
        }

        self.term.set_fg(Color::Green)?;
        self.term
            .print_centered(self.ctx, 4, &format!("Scores: {}", self.last_score))?;
        self.term.reset_fg()?;

        self.term.flush()
    }

    fn play_round(&mut self) -> Result<RoundEnd> {
        let mut round = Round::new(&mut self.rng, GRID);
        let mut paused = false;

        info!("round started at level {}", self.level.label());
        self.draw_frame(&round)?;

        loop {
            if self.ctx.stop_requested() {
                return Ok(RoundEnd::Stopped);
            }

            sleep(self.level.tick_delay());
            let input = self.term.poll_input(self.ctx)?;

            if paused {
                if input == Input::PauseToggle {
                    paused = false;
                }
                continue;
            }

            if input == Input::PauseToggle {
                paused = true;
                self.term
                    .print_centered(self.ctx, 0, "Paused! Press 'R' to continue...")?;
                self.term.flush()?;
                continue;
            }

            match round.tick(input, &mut self.rng) {
                TickOutcome::Continue => self.draw_frame(&round)?,
                TickOutcome::Dead => {
                    info!("round over, score {}", round.score);
                    self.last_score = round.score;
                    return Ok(RoundEnd::Dead);
                }
                TickOutcome::Won => {
                    info!("grid filled, score {}", round.score);
                    self.last_score = round.score;
                    return Ok(RoundEnd::Won);
                }
            }
        }
    }

    fn draw_frame(&mut self, round: &Round) -> Result<()> {
        self.term.clear()?;

        for row in 0..round.grid.height {
            for col in 0..round.grid.width {
                self.term
                    .draw_cell(self.ctx, round.grid, Cell::new(row, col), BACKGROUND_STR)?;
            }
        }

        self.term.set_fg(Color::White)?;
        for (i, cell) in round.snake.body().iter().enumerate() {
            let glyph = segment_glyph(&round.snake, i, round.velocity);
            self.term
                .draw_cell(self.ctx, round.grid, *cell, glyph_str(glyph))?;
        }
        self.term.reset_fg()?;

        if let Some(cell) = round.apple.cell() {
            self.term.set_fg(Color::Red)?;
            self.term.draw_cell(self.ctx, round.grid, cell, APPLE_STR)?;
            self.term.reset_fg()?;
        }

        self.term.flush()
    }

    /// Win idle screen: an animating ellipsis until any key is pressed.
    fn win_screen(&mut self) -> Result<()> {
        let mut fr: u32 = 0;
        let mut dots: usize = 0;

        loop {
            if self.ctx.stop_requested() || self.term.poll_any_key(self.ctx)? {
                return Ok(());
            }

            if fr % 5 == 0 {
                dots = (dots + 1) % 4;
                self.term.clear()?;
                self.term.print_centered(self.ctx, 0, "Applause!")?;
                let line = format!("Press Any To Continue{}", ".".repeat(dots + 1));
                self.term.print_centered(self.ctx, 1, &line)?;
                self.term.flush()?;
            }

            fr = fr.wrapping_add(1);
            sleep(WIN_FRAME_DELAY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn level_cycling_clamps_at_the_extremes() {
        assert_eq!(Level::Easy.cycle_up(), Level::Easy);
        assert_eq!(Level::Hard.cycle_down(), Level::Hard);
        assert_eq!(Level::Medium.cycle_up(), Level::Easy);
        assert_eq!(Level::Medium.cycle_down(), Level::Hard);
        assert_eq!(Level::Easy.cycle_down(), Level::Medium);
        assert_eq!(Level::Hard.cycle_up(), Level::Medium);
    }

    #[test]
    fn levels_map_to_distinct_delays() {
        assert!(Level::Easy.tick_delay() > Level::Medium.tick_delay());
        assert!(Level::Medium.tick_delay() > Level::Hard.tick_delay());
    }

    #[test]
    fn round_starts_with_a_placed_apple_off_the_body() {
        let mut rng = StdRng::seed_from_u64(1);
        let round = Round::new(&mut rng, GRID);
        let apple = round.apple.cell().unwrap();
        assert!(!round.snake.occupies(apple));
        assert_eq!(round.score, 0);
        assert_eq!(round.velocity, Cell::new(0, 1));
    }

    #[test]
    fn eating_grows_scores_and_respawns_in_one_tick() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut round = Round::new(&mut rng, GRID);
        round.apple = Apple::Placed(Cell::new(0, 7));

        assert_eq!(round.tick(Input::None, &mut rng), TickOutcome::Continue);
        assert_eq!(round.score, 1);
        assert_eq!(round.snake.len(), 4);
        let apple = round.apple.cell().expect("apple respawned");
        assert!(!round.snake.occupies(apple));
    }

    #[test]
    fn steering_input_is_applied_before_the_move() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = Round::new(&mut rng, GRID);
        round.apple = Apple::Placed(Cell::new(3, 3));

        round.tick(Input::Down, &mut rng);
        assert_eq!(round.snake.head(), Cell::new(1, 6));
        // Reversal attempt is ignored; the snake keeps going down.
        round.tick(Input::Up, &mut rng);
        assert_eq!(round.snake.head(), Cell::new(2, 6));
    }

    #[test]
    fn crash_ends_the_round() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut round = Round::new(&mut rng, GRID);
        round.apple = Apple::Placed(Cell::new(7, 7));
        round.snake = Snake::from_cells(vec![
            Cell::new(1, 1),
            Cell::new(1, 0),
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
        ]);
        round.velocity = Cell::new(0, 1);

        assert_eq!(round.tick(Input::Up, &mut rng), TickOutcome::Dead);
    }
}
