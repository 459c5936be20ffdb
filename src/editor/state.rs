//! Editor state management
//!
//! Holds the cursor and the screen it lives on, and applies key events to
//! them. This is the only mutable state in the program and is owned by the
//! main loop.

use super::cursor::Cursor;
use crate::input::{Key, QUIT};
use crate::terminal::ScreenSize;

/// Main loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Keep rendering and reading keys
    Running,

    /// Quit chord received; clear the screen and exit
    Terminating,
}

/// Cursor plus the screen it is clamped to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    cursor: Cursor,
    size: ScreenSize,
}

impl Editor {
    /// Create editor state for a screen, cursor at origin
    pub fn new(size: ScreenSize) -> Self {
        Self {
            cursor: Cursor::at_origin(),
            size,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn size(&self) -> ScreenSize {
        self.size
    }

    /// Move the cursor one cell for an arrow key
    ///
    /// The cursor stops at the screen edges; there is no wraparound. Keys
    /// other than the four arrows are ignored.
    pub fn move_cursor(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => {
                self.cursor.col = self.cursor.col.saturating_sub(1);
            }
            Key::ArrowRight => {
                if self.cursor.col < self.size.last_col() {
                    self.cursor.col += 1;
                }
            }
            Key::ArrowUp => {
                self.cursor.row = self.cursor.row.saturating_sub(1);
            }
            Key::ArrowDown => {
                if self.cursor.row < self.size.last_row() {
                    self.cursor.row += 1;
                }
            }
            _ => {}
        }
    }

    /// Apply one key event and report whether the loop should go on
    pub fn process_key(&mut self, key: Key) -> LoopState {
        match key {
            QUIT => return LoopState::Terminating,
            Key::Home => {
                self.cursor.col = 0;
            }
            Key::End => {
                self.cursor.col = self.size.last_col();
            }
            Key::PageUp | Key::PageDown => {
                let direction = if key == Key::PageUp {
                    Key::ArrowUp
                } else {
                    Key::ArrowDown
                };
                for _ in 0..self.size.rows {
                    self.move_cursor(direction);
                }
            }
            _ if key.is_navigation() => self.move_cursor(key),
            _ => {}
        }
        LoopState::Running
    }
}
