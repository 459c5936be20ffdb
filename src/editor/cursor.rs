//! Cursor position within the screen grid

/// Cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Row position (0-indexed)
    pub row: usize,

    /// Column position (0-indexed)
    pub col: usize,
}

impl Cursor {
    /// Create a new cursor at the given position
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Create a cursor at origin (0, 0)
    pub fn at_origin() -> Self {
        Self::new(0, 0)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::at_origin()
    }
}
