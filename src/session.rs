//! Editor session management
//!
//! This module provides `Session`, which ties raw mode, the editor state,
//! the renderer and the key decoder together into the main loop.

use crate::editor::{Editor, LoopState};
use crate::input::read_key;
use crate::renderer::refresh_screen;
use crate::terminal::{RESET_SCREEN, RawModeGuard, ScreenSize, Tty, command};
use anyhow::{Context as _, Result};
use std::io::{self, Write};

/// Interactive session on one terminal
///
/// Holds raw mode for its whole lifetime. The terminal is restored by
/// `close`, or on drop if the session ends any other way.
pub struct Session<T: Tty> {
    terminal: RawModeGuard<T>,
    editor: Editor,
}

impl<T: Tty> Session<T> {
    /// Enter raw mode and size the editor to the terminal window
    pub fn open(tty: T) -> Result<Self> {
        let mut terminal = RawModeGuard::acquire(tty)?;

        let size = match query_size(terminal.tty()) {
            Ok(size) => size,
            Err(e) => {
                // A failed restore is only logged; the size error is returned
                if let Err(release_err) = terminal.release() {
                    log::error!("{:#}", release_err);
                }
                return Err(e);
            }
        };

        log::info!("session opened on {}x{} screen", size.cols, size.rows);
        Ok(Self {
            terminal,
            editor: Editor::new(size),
        })
    }

    /// Render and process keys until the quit chord
    ///
    /// On quit the screen is cleared and the cursor homed so the shell
    /// prompt comes back on a clean screen.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.refresh();

            let key = read_key(self.terminal.tty_mut())?;
            if self.editor.process_key(key) == LoopState::Terminating {
                log::info!("quit chord received");
                return self.reset_screen();
            }
        }
    }

    /// Restore the terminal's original mode
    pub fn close(&mut self) -> Result<()> {
        self.terminal.release()
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn tty(&self) -> &T {
        self.terminal.tty()
    }

    /// Draw one frame; a failed write only costs this frame
    fn refresh(&mut self) {
        let cursor = self.editor.cursor();
        let size = self.editor.size();

        if let Err(e) = refresh_screen(self.terminal.tty_mut(), cursor, size) {
            log::warn!("failed to write frame: {}", e);
        }
    }

    fn reset_screen(&mut self) -> Result<()> {
        let tty = self.terminal.tty_mut();
        tty.write_all(&command::encode(&RESET_SCREEN))
            .context("write")?;
        tty.flush().context("write")
    }
}

fn query_size<T: Tty>(tty: &T) -> Result<ScreenSize> {
    let (rows, cols) = tty.window_size().context("getWindowSize")?;
    ScreenSize::new(rows, cols).context("getWindowSize")
}

/// Report an error that ends the process
///
/// Clears the screen and homes the cursor on `out` so no half-drawn frame
/// is left behind, then writes the diagnostic to `diag`. Raw mode must
/// already be released.
pub fn report_fatal<W, E>(out: &mut W, diag: &mut E, err: &anyhow::Error) -> io::Result<()>
where
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    out.write_all(&command::encode(&RESET_SCREEN))?;
    out.flush()?;
    writeln!(diag, "{:#}", err)?;
    diag.flush()
}

/// Run a full editor session on `tty`
///
/// Raw mode is released before returning, whether the loop ended by the
/// quit chord or by an error. The first error wins.
pub fn run<T: Tty>(tty: T) -> Result<()> {
    let mut session = Session::open(tty)?;
    let outcome = session.run();
    let released = session.close();
    log::info!("session closed");
    outcome.and(released)
}
