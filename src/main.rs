use anyhow::{Context as _, Result};

use torsnake::context::Ctx;
use torsnake::game::Game;
use torsnake::logging;
use torsnake::term::Term;

fn main() -> Result<()> {
    logging::init_from_env()?;

    let (cols, rows) = Term::size().context("failed to acquire the terminal")?;
    let ctx = Ctx::new(cols, rows);

    let mut term = Term::new().context("failed to acquire the terminal")?;
    term.setup().context("failed to set up the terminal")?;

    // The game loop exits when Ctrl+C sets the stop flag; the terminal
    // is restored on the way out.
    Game::new(term, &ctx).run()
}
