//! Raw mode acquisition and restoration
//!
//! Raw mode turns off everything the line discipline normally does for an
//! interactive shell: echo, line buffering, signal keys, input translation
//! and output post-processing. Reads return after at most one tenth of a
//! second even when no byte arrived.

use super::Tty;
use anyhow::{Context as _, Result};
use nix::sys::termios::{
    ControlFlags, InputFlags, LocalFlags, OutputFlags, SpecialCharacterIndices, Termios,
};

/// Read parameters applied on top of the raw flag set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawModeConfig {
    /// VMIN: minimum number of bytes before `read` may return
    pub min_bytes: u8,

    /// VTIME: read timeout in tenths of a second
    pub timeout: u8,
}

impl Default for RawModeConfig {
    fn default() -> Self {
        Self {
            min_bytes: 0,
            timeout: 1,
        }
    }
}

impl RawModeConfig {
    /// Derive raw attributes from the original snapshot
    ///
    /// Flags not named here keep their original value.
    pub fn apply(&self, original: &Termios) -> Termios {
        let mut raw = original.clone();

        // ICRNL: ctrl-M arrives as 13, IXON: ctrl-S and ctrl-Q reach us
        raw.input_flags.remove(
            InputFlags::BRKINT
                | InputFlags::ICRNL
                | InputFlags::INPCK
                | InputFlags::ISTRIP
                | InputFlags::IXON,
        );
        raw.output_flags.remove(OutputFlags::OPOST);
        raw.control_flags.insert(ControlFlags::CS8);
        // ISIG: ctrl-C and ctrl-Z, IEXTEN: ctrl-V
        raw.local_flags.remove(
            LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG,
        );

        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = self.min_bytes;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = self.timeout;
        raw
    }
}

/// Exclusive raw mode on a terminal
///
/// Owns the device for as long as raw mode is held and keeps the original
/// attributes so they can be put back. `release` restores them explicitly;
/// if it is never reached (early return or panic) the Drop impl makes a
/// best-effort restore.
pub struct RawModeGuard<T: Tty> {
    tty: T,
    original: Option<Termios>,
}

impl<T: Tty> RawModeGuard<T> {
    /// Snapshot the current attributes and switch the terminal to raw mode
    pub fn acquire(tty: T) -> Result<Self> {
        Self::acquire_with(tty, RawModeConfig::default())
    }

    /// Like `acquire`, with explicit read parameters
    pub fn acquire_with(tty: T, config: RawModeConfig) -> Result<Self> {
        let original = tty.attributes().context("tcgetattr")?;
        let raw = config.apply(&original);

        // Snapshot is recorded before applying so a partial apply still restores
        let mut guard = Self {
            tty,
            original: Some(original),
        };
        guard.tty.set_attributes(&raw).context("tcsetattr")?;

        log::debug!("raw mode acquired (VMIN={}, VTIME={})", config.min_bytes, config.timeout);
        Ok(guard)
    }

    /// Restore the original attributes
    ///
    /// Calling this more than once is harmless: only the first call
    /// touches the terminal.
    pub fn release(&mut self) -> Result<()> {
        if let Some(original) = self.original.take() {
            self.tty.set_attributes(&original).context("tcsetattr")?;
            log::debug!("raw mode released");
        }
        Ok(())
    }

    /// Whether raw mode is still held
    pub fn is_raw(&self) -> bool {
        self.original.is_some()
    }

    /// Get immutable reference to the terminal
    pub fn tty(&self) -> &T {
        &self.tty
    }

    /// Get mutable reference to the terminal
    pub fn tty_mut(&mut self) -> &mut T {
        &mut self.tty
    }
}

impl<T: Tty> Drop for RawModeGuard<T> {
    fn drop(&mut self) {
        if let Some(original) = self.original.take()
            && let Err(e) = self.tty.set_attributes(&original)
        {
            log::error!("failed to restore terminal attributes: {}", e);
        }
    }
}
