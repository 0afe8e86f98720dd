//! Core data models for estate survey planning.

use serde::{Deserialize, Serialize};

/// A rectangular estate measured in 10 m grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Estate {
    /// Number of cells along the X axis
    pub length: u32,
    /// Number of cells along the Y axis
    pub width: u32,
}

impl Estate {
    pub fn new(length: u32, width: u32) -> Self {
        Self { length, width }
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.length) * u64::from(self.width)
    }

    /// The plot a full survey finishes on.
    pub fn last_plot(&self) -> Cell {
        Cell::new(self.length, self.width)
    }
}

/// A tree standing on one cell of an estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tree {
    pub x: u32,
    pub y: u32,
    /// Canopy height in meters
    pub height: u32,
}

impl Tree {
    pub fn new(x: u32, y: u32, height: u32) -> Self {
        Self { x, y, height }
    }

    pub fn cell(&self) -> Cell {
        Cell::new(self.x, self.y)
    }
}

/// One 1-indexed `(x, y)` plot of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Chebyshev adjacency: both coordinate differences are at most one.
    /// A cell is adjacent to itself.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

/// Distance breakdown for a full survey of an estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyPlan {
    pub total_distance: i64,
    pub horizontal_distance: i64,
    pub elevation_distance: i64,
}

/// Where a budget-constrained survey has to come down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingPoint {
    pub cell: Cell,
    /// Budget the landing point was evaluated against
    pub max_distance: i64,
}

/// A survey plan together with the landing point for a travel budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetedSurveyPlan {
    pub plan: SurveyPlan,
    pub landing: LandingPoint,
}
