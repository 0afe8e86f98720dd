//! Boustrophedon ordering of estate plots, and the full-grid walk used by
//! the landing search.
//!
//! Tree ordering visits rows in increasing `y`. Within a row `x` ascends when
//! `y` is even and descends when `y` is odd. Parity is taken on the raw
//! 1-indexed coordinate, so row 1 runs right-to-left.
//!
//! The grid walk does not use that parity: every row is walked in ascending
//! `x`, so the walk always ends on the row-major last plot.

use crate::models::{Cell, Tree};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::mem;

/// How the full-grid walk treats the estate dimensions between rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridTraversal {
    /// Swap `length` and `width` after every completed row, as the
    /// established survey service does. Identical to `Fixed` on square estates.
    #[default]
    SwapEachRow,
    /// Keep the estate dimensions for the whole walk.
    Fixed,
}

/// Zigzag comparison of two plots.
pub fn zigzag_cmp(a: &Cell, b: &Cell) -> Ordering {
    if a.y != b.y {
        return a.y.cmp(&b.y);
    }
    if a.y % 2 == 0 {
        a.x.cmp(&b.x)
    } else {
        b.x.cmp(&a.x)
    }
}

/// Trees in zigzag visiting order.
///
/// Returns a new vector; the caller's slice is left untouched. The sort is
/// stable, so trees sharing a plot keep their input order.
pub fn zigzag_order(trees: &[Tree]) -> Vec<Tree> {
    let mut ordered = trees.to_vec();
    ordered.sort_by(|a, b| zigzag_cmp(&a.cell(), &b.cell()));
    ordered
}

/// Cell-by-cell walk over a whole grid, rows in increasing `y` and each row
/// in increasing `x`.
#[derive(Debug, Clone)]
pub struct GridWalk {
    length: u32,
    width: u32,
    traversal: GridTraversal,
    y: u32,
    step: u32,
}

impl GridWalk {
    pub fn new(length: u32, width: u32, traversal: GridTraversal) -> Self {
        Self {
            length,
            width,
            traversal,
            y: 1,
            step: 0,
        }
    }

    /// Current `(length, width)`. After the walk is exhausted these are the
    /// final dimensions, which differ from the starting ones when
    /// `SwapEachRow` swapped an odd number of times.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.length, self.width)
    }
}

impl Iterator for GridWalk {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        loop {
            if self.length == 0 || self.y > self.width {
                return None;
            }
            if self.step < self.length {
                self.step += 1;
                return Some(Cell::new(self.step, self.y));
            }

            // Row finished. The row bound is re-read after the swap.
            if self.traversal == GridTraversal::SwapEachRow {
                mem::swap(&mut self.length, &mut self.width);
            }
            self.y += 1;
            self.step = 0;
        }
    }
}
