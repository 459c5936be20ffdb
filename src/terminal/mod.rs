//! Terminal device module
//!
//! This module contains everything that touches the controlling terminal:
//! - The `Tty` seam over the device (attributes, byte reads, size, output)
//! - Raw mode acquisition and restoration
//! - Screen size validation
//! - The ANSI control sequences the renderer emits

// Submodules
pub mod command;
pub mod mode;
pub mod size;

// Re-export commonly used types
pub use command::{Command, RESET_SCREEN};
pub use mode::{RawModeConfig, RawModeGuard};
pub use size::ScreenSize;

use nix::errno::Errno;
use nix::libc;
use nix::sys::termios::{self, SetArg, Termios};
use std::io::{self, Write};
use std::os::fd::AsRawFd;

/// Source of single input bytes under the raw mode read discipline
///
/// `Ok(None)` means the read timed out with no data. It is not end of
/// input: callers poll again.
pub trait ByteSource {
    /// Read at most one byte
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// The controlling terminal
///
/// Abstracts the single terminal device so raw mode handling, the main
/// loop and the diagnostic dump can run against a fake in tests.
pub trait Tty: ByteSource + Write {
    /// Read the current line-discipline attributes
    fn attributes(&self) -> io::Result<Termios>;

    /// Apply attributes, flushing pending input first
    fn set_attributes(&mut self, termios: &Termios) -> io::Result<()>;

    /// Query the window size as (rows, cols)
    fn window_size(&self) -> io::Result<(usize, usize)>;
}

/// Terminal attached to the process's stdin and stdout
///
/// Attributes and input come from stdin; output and the window size query
/// go to stdout. Writes bypass the std buffered stdout so each frame
/// reaches the device in a single `write(2)`.
pub struct StdTty {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdTty {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdTty {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for StdTty {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];

        match nix::unistd::read(self.stdin.as_raw_fd(), &mut buf) {
            Ok(0) => Ok(None), // VTIME expired
            Ok(_) => Ok(Some(buf[0])),
            Err(Errno::EAGAIN) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Write for StdTty {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        nix::unistd::write(&self.stdout, buf).map_err(|e| e.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Tty for StdTty {
    fn attributes(&self) -> io::Result<Termios> {
        termios::tcgetattr(&self.stdin).map_err(|e| e.into())
    }

    fn set_attributes(&mut self, termios: &Termios) -> io::Result<()> {
        termios::tcsetattr(&self.stdin, SetArg::TCSAFLUSH, termios).map_err(|e| e.into())
    }

    fn window_size(&self) -> io::Result<(usize, usize)> {
        let mut winsize = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };

        // SAFETY: winsize is an owned plain C struct and TIOCGWINSZ only
        // writes a winsize through the pointer
        unsafe {
            if libc::ioctl(self.stdout.as_raw_fd(), libc::TIOCGWINSZ, &mut winsize) == -1 {
                return Err(io::Error::last_os_error());
            }
        }

        Ok((winsize.ws_row as usize, winsize.ws_col as usize))
    }
}
