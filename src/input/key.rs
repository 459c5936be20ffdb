//! Logical key events produced by the key decoder

/// One user input action
///
/// Plain bytes (including control chords) are passed through as `Char`.
/// Navigation keys that terminals report as escape sequences get their own
/// variants. `Escape` is a bare escape press or any sequence the decoder
/// did not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Literal byte
    Char(u8),

    /// Escape key, or an unrecognized/truncated escape sequence
    Escape,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
}

/// The escape byte that starts every special key sequence
pub const ESC: u8 = 0x1b;

/// Quit chord: control+q
pub const QUIT: Key = Key::ctrl(b'q');

impl Key {
    /// Key produced by holding control with `key`
    ///
    /// The terminal strips the top three bits, so ctrl+q arrives as 0x11.
    pub const fn ctrl(key: u8) -> Self {
        Self::Char(key & 0x1f)
    }

    /// Whether this key moves the cursor
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::ArrowUp
                | Self::ArrowDown
                | Self::ArrowLeft
                | Self::ArrowRight
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }
}
