//! Escape sequence decoding
//!
//! Terminals report special keys as escape sequences with no length prefix.
//! The decoder looks ahead at most three bytes after ESC and resolves the
//! prefix into a named key. Anything truncated or unknown falls back to a
//! literal `Key::Escape`, so an odd sequence never blocks the decoder and is
//! never mistaken for navigation.
//!
//! Supported sequences:
//!
//! | Bytes        | Key                 |
//! |--------------|---------------------|
//! | `ESC [ A..D` | arrows              |
//! | `ESC [ H/F`  | Home / End          |
//! | `ESC O H/F`  | Home / End          |
//! | `ESC [ n ~`  | 1,7 Home; 4,8 End; 3 Delete; 5 PageDown; 6 PageUp |

use super::key::{ESC, Key};
use crate::terminal::ByteSource;
use anyhow::{Context as _, Result};

/// Block until one key has been read and decoded
///
/// Timeouts on the first byte are retried. Inside an escape sequence a
/// timeout means the sequence ended early.
pub fn read_key<R: ByteSource + ?Sized>(input: &mut R) -> Result<Key> {
    let byte = loop {
        if let Some(byte) = input.read_byte().context("read")? {
            break byte;
        }
    };

    let key = if byte == ESC {
        read_escape_sequence(input)?
    } else {
        Key::Char(byte)
    };

    log::debug!("key: {:?}", key);
    Ok(key)
}

/// Decode what follows an ESC byte
fn read_escape_sequence<R: ByteSource + ?Sized>(input: &mut R) -> Result<Key> {
    let Some(first) = input.read_byte().context("read")? else {
        return Ok(Key::Escape);
    };
    let Some(second) = input.read_byte().context("read")? else {
        return Ok(Key::Escape);
    };

    let key = match (first, second) {
        (b'[', digit @ b'0'..=b'9') => match input.read_byte().context("read")? {
            Some(b'~') => tilde_key(digit),
            _ => None,
        },
        (b'[', b'A') => Some(Key::ArrowUp),
        (b'[', b'B') => Some(Key::ArrowDown),
        (b'[', b'C') => Some(Key::ArrowRight),
        (b'[', b'D') => Some(Key::ArrowLeft),
        (b'[', b'H') | (b'O', b'H') => Some(Key::Home),
        (b'[', b'F') | (b'O', b'F') => Some(Key::End),
        _ => None,
    };

    if key.is_none() {
        log::debug!("unrecognized escape sequence: ESC {:?} {:?}", first as char, second as char);
    }
    Ok(key.unwrap_or(Key::Escape))
}

/// Keys reported as `ESC [ <digit> ~`
fn tilde_key(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageDown),
        b'6' => Some(Key::PageUp),
        _ => None,
    }
}
