//! Output batching buffer
//!
//! A frame is assembled here in full and then written with a single call,
//! so the terminal never shows a half-drawn frame.

use crate::terminal::Command;
use std::io::{self, Write};

/// Append-only byte buffer holding one frame
#[derive(Debug, Default)]
pub struct FrameBuffer {
    bytes: Vec<u8>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Copy `bytes` onto the end of the frame
    ///
    /// If the backing storage cannot grow the bytes are dropped and the
    /// frame is simply shorter. Rendering is best-effort and never fatal.
    pub fn append(&mut self, bytes: &[u8]) {
        if let Err(e) = self.bytes.try_reserve(bytes.len()) {
            log::warn!("frame buffer could not grow by {} bytes: {}", bytes.len(), e);
            return;
        }
        self.bytes.extend_from_slice(bytes);
    }

    /// Append the wire form of a control sequence
    pub fn push(&mut self, command: Command) {
        self.append(command.to_string().as_bytes());
    }

    /// Append `count` copies of one byte
    pub fn repeat(&mut self, byte: u8, count: usize) {
        if let Err(e) = self.bytes.try_reserve(count) {
            log::warn!("frame buffer could not grow by {} bytes: {}", count, e);
            return;
        }
        self.bytes.resize(self.bytes.len() + count, byte);
    }

    /// Assembled bytes so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the whole frame in one operation and free the storage
    pub fn flush<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        log::trace!("flushing frame of {} bytes", self.bytes.len());
        out.write_all(&self.bytes)?;
        out.flush()
    }
}
