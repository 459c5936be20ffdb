//! Screen dimensions reported by the terminal device

use anyhow::{Result, bail};

/// Terminal size in character cells
///
/// Both dimensions are always non-zero. There is no fallback size: a
/// terminal that reports zero rows or columns is treated as unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Number of rows
    pub rows: usize,

    /// Number of columns
    pub cols: usize,
}

impl ScreenSize {
    /// Validate a raw (rows, cols) pair as returned by `TIOCGWINSZ`
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            bail!("terminal reported an empty window ({rows} rows, {cols} columns)");
        }
        Ok(Self { rows, cols })
    }

    /// Index of the last row
    pub fn last_row(&self) -> usize {
        self.rows - 1
    }

    /// Index of the last column
    pub fn last_col(&self) -> usize {
        self.cols - 1
    }
}
