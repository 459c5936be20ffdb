//! ANSI control sequences emitted by the screen renderer
//!
//! Only the handful of VT100 sequences the editor needs are modelled here.
//! Each variant renders to its exact wire form through `Display`, so the
//! frame buffer can append commands without building strings by hand.

use std::fmt;

/// Control sequence written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Erase in Display (ED), entire screen
    /// ESC[2J
    ClearScreen,

    /// Cursor Position (CUP) with no parameters, top-left corner
    /// ESC[H
    CursorHome,

    /// Cursor Position (CUP) - Move cursor to absolute position
    /// ESC[{row};{col}H
    /// Both coordinates are 0-indexed here and written 1-indexed.
    CursorPosition { row: usize, col: usize },

    /// Erase in Line (EL), cursor to end of line
    /// ESC[K
    EraseLineToEnd,

    /// Reset DEC private mode 25 (DECTCEM)
    /// ESC[?25l
    HideCursor,

    /// Set DEC private mode 25 (DECTCEM)
    /// ESC[?25h
    ShowCursor,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClearScreen => f.write_str("\x1b[2J"),
            Self::CursorHome => f.write_str("\x1b[H"),
            Self::CursorPosition { row, col } => write!(f, "\x1b[{};{}H", row + 1, col + 1),
            Self::EraseLineToEnd => f.write_str("\x1b[K"),
            Self::HideCursor => f.write_str("\x1b[?25l"),
            Self::ShowCursor => f.write_str("\x1b[?25h"),
        }
    }
}

/// Clear screen followed by cursor home
///
/// Written on every exit path so no partial frame is left on screen.
pub const RESET_SCREEN: [Command; 2] = [Command::ClearScreen, Command::CursorHome];

/// Encode a run of commands into one contiguous byte string
pub fn encode(commands: &[Command]) -> Vec<u8> {
    commands
        .iter()
        .flat_map(|command| command.to_string().into_bytes())
        .collect()
}
