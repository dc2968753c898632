//! Grid model: one table region of a statement page as rows of text cells.

use serde::{Deserialize, Serialize};

/// A grid of text cells as handed over by the upstream table extractor.
///
/// Raw grids may be ragged and may hold newline-merged cells; after
/// [`crate::split::align_table`] the grid is rectangular and every column
/// position carries the same meaning in every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a table from string slices; handy for fixtures.
    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row in the grid.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Pad every row with empty cells up to the widest row.
    pub fn pad_to_width(&mut self) {
        let width = self.width();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
    }
}
