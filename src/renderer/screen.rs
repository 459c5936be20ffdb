//! Frame rendering
//!
//! Draws the whole screen into a `FrameBuffer`: a `~` on every row, the
//! welcome banner a third of the way down, then places the cursor.

use super::buffer::FrameBuffer;
use crate::editor::Cursor;
use crate::terminal::{Command, ScreenSize};
use std::io::{self, Write};

/// Version shown in the welcome banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Glyph drawn at the start of every row
const FILLER: &[u8] = b"~";

/// Welcome banner text before truncation
pub fn banner() -> String {
    format!("Kilo editor -- version {}", VERSION)
}

/// Row on which the banner is drawn
pub fn banner_row(size: ScreenSize) -> usize {
    size.rows / 3
}

/// Build one complete frame
///
/// The cursor is hidden while the rows are redrawn and shown again once it
/// sits at its final position, so it never flickers across the screen.
pub fn render_frame(cursor: Cursor, size: ScreenSize) -> FrameBuffer {
    let mut frame = FrameBuffer::new();

    frame.push(Command::HideCursor);
    frame.push(Command::CursorHome);

    draw_rows(&mut frame, size);

    frame.push(Command::CursorPosition {
        row: cursor.row,
        col: cursor.col,
    });
    frame.push(Command::ShowCursor);

    frame
}

/// Render a frame and write it to `out` in one call
pub fn refresh_screen<W: Write + ?Sized>(
    out: &mut W,
    cursor: Cursor,
    size: ScreenSize,
) -> io::Result<()> {
    render_frame(cursor, size).flush(out)
}

fn draw_rows(frame: &mut FrameBuffer, size: ScreenSize) {
    for y in 0..size.rows {
        if y == banner_row(size) {
            draw_banner(frame, size.cols);
        } else {
            frame.append(FILLER);
        }

        // Clear whatever the previous frame left right of the new content
        frame.push(Command::EraseLineToEnd);

        // No line break after the last row, or the terminal would scroll
        if y < size.last_row() {
            frame.append(b"\r\n");
        }
    }
}

/// Centered banner, truncated to the screen width
fn draw_banner(frame: &mut FrameBuffer, cols: usize) {
    let banner = banner();
    let len = banner.len().min(cols);

    let mut padding = (cols - len) / 2;
    if padding > 0 {
        frame.append(FILLER);
        padding -= 1;
    }
    frame.repeat(b' ', padding);
    frame.append(&banner.as_bytes()[..len]);
}
