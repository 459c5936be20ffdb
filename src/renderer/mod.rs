//! Screen rendering
//!
//! Frames are assembled in a `FrameBuffer` and written to the terminal in a
//! single call. The renderer is best-effort: nothing here is fatal.

pub mod buffer;
pub mod screen;

pub use buffer::FrameBuffer;
pub use screen::{VERSION, banner, refresh_screen, render_frame};
