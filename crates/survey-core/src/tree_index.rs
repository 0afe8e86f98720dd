//! Cell lookup over the trees of one estate.

use crate::models::{Cell, Tree};
use std::collections::HashMap;

/// Read-only map from plot to tree height.
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    heights: HashMap<Cell, u32>,
}

impl TreeIndex {
    /// Build the index. When two trees share a plot the first one wins.
    pub fn new(trees: &[Tree]) -> Self {
        let mut heights = HashMap::with_capacity(trees.len());
        for tree in trees {
            heights.entry(tree.cell()).or_insert(tree.height);
        }
        Self { heights }
    }

    /// Height of the tree at `(x, y)`, if any.
    pub fn height_at(&self, x: u32, y: u32) -> Option<u32> {
        self.heights.get(&Cell::new(x, y)).copied()
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}
