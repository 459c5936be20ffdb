//! Editor state module
//!
//! Cursor position and the key handling that moves it.

pub mod cursor;
pub mod state;

pub use cursor::Cursor;
pub use state::{Editor, LoopState};
