//! Kilo - minimal terminal screen controller
//!
//! This library provides the core of a tiny text-mode editor:
//! - Raw mode acquisition with guaranteed restoration
//! - Key decoding, including escape sequences for navigation keys
//! - Full-screen rendering through a single batched write per frame
//! - Cursor state clamped to the screen
//!
//! ## Quick Start
//!
//! ```no_run
//! use kilo::StdTty;
//!
//! // Runs until control+q, then restores the terminal
//! kilo::run(StdTty::new())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

// Cursor and key handling state
pub mod editor;

// Key events and the escape sequence decoder
pub mod input;

// Frame assembly and output
pub mod renderer;

// Main loop orchestration
pub mod session;

// Terminal device, raw mode and control sequences
pub mod terminal;

#[cfg(test)]
pub mod test_support;

// Re-export commonly used types
pub use editor::{Cursor, Editor, LoopState};
pub use input::{Key, QUIT, dump_bytes, read_key};
pub use renderer::{FrameBuffer, render_frame};
pub use session::{Session, report_fatal, run};
pub use terminal::{
    ByteSource, Command, RESET_SCREEN, RawModeConfig, RawModeGuard, ScreenSize, StdTty, Tty,
};
