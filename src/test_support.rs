//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::terminal::{ByteSource, Tty};
use nix::libc;
use nix::sys::termios::{ControlFlags, InputFlags, LocalFlags, OutputFlags, Termios};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;
use vte::{Params, Parser, Perform};

/// How many idle reads an exhausted script tolerates before failing
const IDLE_READ_LIMIT: usize = 16;

/// One step of scripted terminal input
#[derive(Debug, Clone, Copy)]
pub enum Scripted {
    Byte(u8),
    /// Read timed out with no data
    Timeout,
    Error(io::ErrorKind),
}

/// Byte source replaying a fixed script
///
/// After the script runs out it behaves like an idle keyboard for a few
/// reads, then fails with `UnexpectedEof` so a test waiting for more keys
/// errors out instead of spinning forever.
pub struct ScriptedInput {
    steps: VecDeque<Scripted>,
    idle_reads: usize,
}

impl ScriptedInput {
    pub fn new(steps: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            idle_reads: 0,
        }
    }

    pub fn bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Scripted::Byte))
    }
}

impl ByteSource for ScriptedInput {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        match self.steps.pop_front() {
            Some(Scripted::Byte(byte)) => Ok(Some(byte)),
            Some(Scripted::Timeout) => Ok(None),
            Some(Scripted::Error(kind)) => Err(io::Error::new(kind, "scripted read error")),
            None if self.idle_reads < IDLE_READ_LIMIT => {
                self.idle_reads += 1;
                Ok(None)
            }
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input script exhausted",
            )),
        }
    }
}

/// Attributes of a terminal in normal (cooked) mode
pub fn cooked_termios() -> Termios {
    // SAFETY: termios is a plain C struct of integers; all zeroes is valid
    let mut termios = Termios::from(unsafe { std::mem::zeroed::<libc::termios>() });

    termios.input_flags.insert(InputFlags::ICRNL | InputFlags::IXON | InputFlags::BRKINT);
    termios.output_flags.insert(OutputFlags::OPOST);
    termios.control_flags.insert(ControlFlags::CS8);
    termios.local_flags.insert(
        LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::ISIG | LocalFlags::IEXTEN,
    );
    termios
}

/// Observable state of a `FakeTty`
///
/// Shared through `Rc` so tests can still inspect it after the device has
/// been moved into (and dropped with) a guard or session.
pub struct FakeState {
    pub attributes: Option<Termios>,
    pub set_count: usize,
    pub output: Vec<u8>,
    pub write_count: usize,
    pub window: (usize, usize),
    pub fail_get: bool,
    pub fail_set: bool,
    /// Attribute changes accepted before every later one fails
    pub sets_allowed: Option<usize>,
    pub fail_size: bool,
    pub failing_writes: usize,
}

/// In-memory terminal device
pub struct FakeTty {
    input: ScriptedInput,
    state: Rc<RefCell<FakeState>>,
}

impl FakeTty {
    /// Terminal with a (rows, cols) window, cooked attributes and no input
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            input: ScriptedInput::bytes(b""),
            state: Rc::new(RefCell::new(FakeState {
                attributes: Some(cooked_termios()),
                set_count: 0,
                output: Vec::new(),
                write_count: 0,
                window: (rows, cols),
                fail_get: false,
                fail_set: false,
                sets_allowed: None,
                fail_size: false,
                failing_writes: 0,
            })),
        }
    }

    pub fn with_input(mut self, steps: impl IntoIterator<Item = Scripted>) -> Self {
        self.input = ScriptedInput::new(steps);
        self
    }

    pub fn with_bytes(mut self, bytes: &[u8]) -> Self {
        self.input = ScriptedInput::bytes(bytes);
        self
    }

    pub fn shared(&self) -> Rc<RefCell<FakeState>> {
        Rc::clone(&self.state)
    }

    pub fn fail_get_attributes(&mut self) {
        self.state.borrow_mut().fail_get = true;
    }

    pub fn fail_set_attributes(&mut self) {
        self.state.borrow_mut().fail_set = true;
    }

    /// Accept the switch to raw mode, reject the restore
    pub fn fail_restore(&mut self) {
        self.state.borrow_mut().sets_allowed = Some(1);
    }

    pub fn fail_window_size(&mut self) {
        self.state.borrow_mut().fail_size = true;
    }

    /// Make the next `n` write calls fail
    pub fn fail_next_writes(&mut self, n: usize) {
        self.state.borrow_mut().failing_writes = n;
    }

    pub fn current_attributes(&self) -> Option<Termios> {
        self.state.borrow().attributes.clone()
    }

    pub fn set_count(&self) -> usize {
        self.state.borrow().set_count
    }

    pub fn output(&self) -> Vec<u8> {
        self.state.borrow().output.clone()
    }

    /// Number of successful write calls
    pub fn write_count(&self) -> usize {
        self.state.borrow().write_count
    }
}

impl ByteSource for FakeTty {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.input.read_byte()
    }
}

impl Write for FakeTty {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.borrow_mut();
        if state.failing_writes > 0 {
            state.failing_writes -= 1;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "scripted write error"));
        }
        state.output.extend_from_slice(buf);
        state.write_count += 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Tty for FakeTty {
    fn attributes(&self) -> io::Result<Termios> {
        let state = self.state.borrow();
        if state.fail_get {
            return Err(io::Error::from_raw_os_error(libc::ENOTTY));
        }
        state
            .attributes
            .clone()
            .ok_or_else(|| io::Error::from_raw_os_error(libc::ENOTTY))
    }

    fn set_attributes(&mut self, termios: &Termios) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_set || state.sets_allowed.is_some_and(|n| state.set_count >= n) {
            return Err(io::Error::from_raw_os_error(libc::EIO));
        }
        state.attributes = Some(termios.clone());
        state.set_count += 1;
        Ok(())
    }

    fn window_size(&self) -> io::Result<(usize, usize)> {
        let state = self.state.borrow();
        if state.fail_size {
            return Err(io::Error::from_raw_os_error(libc::ENOTTY));
        }
        Ok(state.window)
    }
}

/// Minimal VT screen used to check what a rendered frame looks like
///
/// Understands printable characters, CR, LF, cursor position, erase in
/// display/line and cursor visibility. Characters past the right edge are
/// dropped rather than wrapped.
pub struct ScreenModel {
    cells: Vec<Vec<char>>,
    cols: usize,
    row: usize,
    col: usize,
    cursor_visible: bool,
    line_feeds: usize,
    carriage_returns: usize,
    erase_lines: usize,
}

impl ScreenModel {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![' '; cols]; rows],
            cols,
            row: 0,
            col: 0,
            cursor_visible: true,
            line_feeds: 0,
            carriage_returns: 0,
            erase_lines: 0,
        }
    }

    /// Feed bytes through the VT parser
    pub fn replay(&mut self, bytes: &[u8]) {
        let mut parser = Parser::new();
        for &byte in bytes {
            parser.advance(self, byte);
        }
    }

    /// Row content with trailing blanks removed
    pub fn row_text(&self, row: usize) -> String {
        let text: String = self.cells[row].iter().collect();
        text.trim_end().to_string()
    }

    /// Cursor as (row, col), 0-indexed
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn line_feeds(&self) -> usize {
        self.line_feeds
    }

    pub fn carriage_returns(&self) -> usize {
        self.carriage_returns
    }

    pub fn erase_line_count(&self) -> usize {
        self.erase_lines
    }

    fn last_row(&self) -> usize {
        self.cells.len() - 1
    }

    #[inline]
    fn param_or(params: &Params, index: usize, default: u16) -> u16 {
        params
            .iter()
            .nth(index)
            .and_then(|p| p.first())
            .copied()
            .filter(|&v| v != 0)
            .unwrap_or(default)
    }
}

impl Perform for ScreenModel {
    fn print(&mut self, c: char) {
        if self.col < self.cols {
            self.cells[self.row][self.col] = c;
            self.col += 1;
        }
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.line_feeds += 1;
                self.row = (self.row + 1).min(self.last_row());
            }
            b'\r' => {
                self.carriage_returns += 1;
                self.col = 0;
            }
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        let is_dec_private = intermediates.first() == Some(&b'?');

        match (is_dec_private, action) {
            (true, 'h') if Self::param_or(params, 0, 0) == 25 => self.cursor_visible = true,
            (true, 'l') if Self::param_or(params, 0, 0) == 25 => self.cursor_visible = false,
            (false, 'H') => {
                let row = Self::param_or(params, 0, 1) as usize;
                let col = Self::param_or(params, 1, 1) as usize;
                self.row = (row - 1).min(self.last_row());
                self.col = (col - 1).min(self.cols - 1);
            }
            (false, 'J') if Self::param_or(params, 0, 0) == 2 => {
                for row in &mut self.cells {
                    row.fill(' ');
                }
            }
            (false, 'K') => {
                self.erase_lines += 1;
                let row = self.row;
                for cell in self.cells[row].iter_mut().skip(self.col) {
                    *cell = ' ';
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_model_prints_and_positions() {
        let mut screen = ScreenModel::new(3, 10);
        screen.replay(b"ab\r\ncd\x1b[3;4H");

        assert_eq!(screen.row_text(0), "ab");
        assert_eq!(screen.row_text(1), "cd");
        assert_eq!(screen.cursor(), (2, 3));
    }

    #[test]
    fn test_screen_model_erase_and_visibility() {
        let mut screen = ScreenModel::new(2, 10);
        screen.replay(b"hello\x1b[1;3H\x1b[K\x1b[?25l");

        assert_eq!(screen.row_text(0), "he");
        assert_eq!(screen.erase_line_count(), 1);
        assert!(!screen.cursor_visible());
    }

    #[test]
    fn test_scripted_input_exhaustion_fails() {
        let mut input = ScriptedInput::bytes(b"");
        for _ in 0..IDLE_READ_LIMIT {
            assert!(input.read_byte().unwrap().is_none());
        }
        assert!(input.read_byte().is_err());
    }
}
