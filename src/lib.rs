//! Wraparound terminal Snake: a toroidal 8x8 grid, a segmented body
//! drawn with box-drawing glyphs, and a menu/playing/won state machine
//! on top of crossterm.

pub mod apple;
pub mod context;
pub mod game;
pub mod glyph;
pub mod grid;
pub mod logging;
pub mod snake;
pub mod term;

/// Grid coordinates are small signed integers so wraparound arithmetic
/// can go one step out of range before being folded back.
pub type GridInt = i16;
