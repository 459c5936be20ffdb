//! Diagnostic byte dump
//!
//! Prints every raw input byte on its own line instead of decoding keys,
//! which is handy for checking what a terminal actually sends for a key.

use super::key::{Key, QUIT};
use crate::terminal::Tty;
use anyhow::{Context as _, Result};

/// Format one byte the way the dump prints it (without line ending)
pub fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("{} ('{}')", byte, byte as char)
    } else {
        byte.to_string()
    }
}

/// Echo raw input bytes until the quit chord arrives
///
/// The terminal must already be in raw mode. Output post-processing is off,
/// so every line ends in an explicit `\r\n`.
pub fn dump_bytes<T: Tty + ?Sized>(tty: &mut T) -> Result<()> {
    loop {
        let Some(byte) = tty.read_byte().context("read")? else {
            continue;
        };

        let line = format!("{}\r\n", describe_byte(byte));
        tty.write_all(line.as_bytes()).context("write")?;
        tty.flush().context("write")?;

        if Key::Char(byte) == QUIT {
            log::info!("quit chord received, leaving byte dump");
            return Ok(());
        }
    }
}
