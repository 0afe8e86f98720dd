//! Descriptive statistics over tree heights.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeStats {
    pub count: usize,
    pub max: u32,
    pub min: u32,
    pub median: f64,
}

impl TreeStats {
    /// Summarize heights. An estate without trees reports all zeros.
    pub fn from_heights(heights: &[u32]) -> Self {
        if heights.is_empty() {
            return Self::default();
        }

        let mut sorted = heights.to_vec();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
        } else {
            f64::from(sorted[mid])
        };

        Self {
            count: sorted.len(),
            max: sorted[sorted.len() - 1],
            min: sorted[0],
            median,
        }
    }
}
