// src/layout/ring.rs

//! Ring search for a free cell below a set of anchors.
//!
//! Each anchor owns a cursor that starts one row below it. On every ring the
//! cursor jumps by the ring offset, alternating right (odd) and left (even),
//! which visits the starting column, then +1, -1, +2, -2 and so on. A cursor
//! that leaves the grid drops one row and restarts just right of its anchor
//! column, remembering the ring at which it wrapped.

use tracing::trace;

use crate::layout::grid_index::{GridIndex, Slot};
use crate::types::GridPos;

#[derive(Debug, Clone, Copy)]
struct Cursor {
    anchor: usize,
    pos: GridPos,
    /// Ring at which this cursor last wrapped to a new row.
    reset: i32,
    initial_x: i32,
}

impl Cursor {
    fn below(anchor: Slot) -> Self {
        Self {
            anchor: anchor.node,
            pos: GridPos::new(anchor.pos.x, anchor.pos.y + 1),
            reset: 0,
            initial_x: anchor.pos.x,
        }
    }

    fn advance(&mut self, distance: i32, columns: i32) {
        let d = distance - self.reset;
        let mut x = self.pos.x + if d % 2 == 1 { d } else { -d };

        if x < 0 || x >= columns {
            self.reset = distance - 1;
            self.pos.y += 1;
            x = self.initial_x + 1;
            if x >= columns {
                self.reset += 1;
                x -= 2;
            }
            x = x.clamp(0, columns - 1);
        }

        self.pos.x = x;
    }
}

/// Result of a ring search: the winning anchor's node index and the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeCell {
    pub anchor: usize,
    pub pos: GridPos,
}

/// Find the first free cell, in anchor order, on the smallest ring that has
/// one. Returns `None` only when `anchors` is empty.
pub fn find_free_cell(grid: &GridIndex, anchors: &[Slot], columns: i32) -> Option<FreeCell> {
    if anchors.is_empty() {
        return None;
    }

    let mut cursors: Vec<Cursor> = anchors.iter().copied().map(Cursor::below).collect();
    let mut distance = 0;

    loop {
        if let Some(hit) = cursors.iter().find(|c| grid.is_free(c.pos)) {
            trace!(distance, anchor = hit.anchor, x = hit.pos.x, y = hit.pos.y, "ring search hit");
            return Some(FreeCell {
                anchor: hit.anchor,
                pos: hit.pos,
            });
        }

        distance += 1;
        for cursor in cursors.iter_mut() {
            cursor.advance(distance, columns);
        }
    }
}
