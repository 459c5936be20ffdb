//! Keyboard input module
//!
//! Turns the raw byte stream from the terminal into logical key events:
//! - Key event type and control chord helpers
//! - Escape sequence decoder
//! - Raw byte dump for diagnostics

pub mod decoder;
pub mod dump;
pub mod key;

pub use decoder::read_key;
pub use dump::dump_bytes;
pub use key::{Key, QUIT};
