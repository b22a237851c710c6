//! Per-segment glyph selection. Pure functions from a segment's local
//! neighborhood to an opaque glyph tag; the terminal layer owns the
//! glyph-to-character art.
//!
//! All neighbor arithmetic is wraparound-aware: deltas are normalized to
//! {-1, 0, 1} with `Grid::signed_delta` before any glyph decision, so a
//! corner sitting on the wrap seam renders exactly like the same corner
//! in the middle of the grid.

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    HeadVertical,
    HeadLeft,
    HeadRight,
    TailUp,
    TailDown,
    TailLeft,
    TailRight,
    BodyHorizontal,
    BodyVertical,
    CornerBottomLeft,
    CornerBottomRight,
    CornerTopLeft,
    CornerTopRight,
}

/// Head glyph from the current velocity. The two horizontal heads are
/// asymmetric art, one per travel direction.
pub fn head_glyph(velocity: Cell) -> Glyph {
    if velocity.row != 0 {
        Glyph::HeadVertical
    } else if velocity.col > 0 {
        Glyph::HeadLeft
    } else {
        Glyph::HeadRight
    }
}

/// Tail glyph from the step between the tail and its head-ward neighbor.
pub fn tail_glyph(tail: Cell, toward_head: Cell) -> Glyph {
    let row = Grid::signed_delta(toward_head.row, tail.row);
    let col = Grid::signed_delta(toward_head.col, tail.col);

    if col == 0 {
        if row < 0 {
            Glyph::TailUp
        } else {
            Glyph::TailDown
        }
    } else if col < 0 {
        Glyph::TailLeft
    } else {
        Glyph::TailRight
    }
}

/// Interior segment glyph from the two flanking segments. `toward_tail`
/// is the neighbor at index i+1, `toward_head` the neighbor at i-1.
pub fn body_glyph(cur: Cell, toward_tail: Cell, toward_head: Cell) -> Glyph {
    let dif = toward_tail - toward_head;

    if dif.row == 0 {
        return Glyph::BodyHorizontal;
    }
    if dif.col == 0 {
        return Glyph::BodyVertical;
    }

    // A corner: normalize each axis, then look up the connector by the
    // flank deltas and whether the tail-ward neighbor sits in the same
    // column as this segment.
    let row = Grid::signed_delta(toward_tail.row, toward_head.row);
    let col = Grid::signed_delta(toward_tail.col, toward_head.col);
    let aligned = toward_tail.col == cur.col;

    match (aligned, row, col) {
        (true, 1, 1) => Glyph::CornerBottomLeft,
        (true, 1, _) => Glyph::CornerBottomRight,
        (true, _, 1) => Glyph::CornerTopLeft,
        (true, _, _) => Glyph::CornerTopRight,
        (false, -1, -1) => Glyph::CornerBottomLeft,
        (false, -1, _) => Glyph::CornerBottomRight,
        (false, _, -1) => Glyph::CornerTopLeft,
        (false, _, _) => Glyph::CornerTopRight,
    }
}

/// Glyph for the segment at `index`, dispatching on its position in the
/// body. The body is always at least 3 segments long, so head, tail and
/// interior are distinct.
pub fn segment_glyph(snake: &Snake, index: usize, velocity: Cell) -> Glyph {
    let body = snake.body();
    let last = body.len() - 1;

    if index == 0 {
        head_glyph(velocity)
    } else if index == last {
        tail_glyph(body[last], body[last - 1])
    } else {
        body_glyph(body[index], body[index + 1], body[index - 1])
    }
}
