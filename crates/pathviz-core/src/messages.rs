//! Input events: [`Msg`], [`Key`], [`MouseAction`].

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Escape,
    Space,
    /// A printable character.
    Char(char),
}

// ---------------------------------------------------------------------------
// MouseAction
// ---------------------------------------------------------------------------

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    /// Mouse moved with the primary button held.
    Drag,
    /// Button released.
    Release,
}

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// An input message delivered to the application.
///
/// Mouse positions are in screen coordinates (`x` = terminal column,
/// `y` = terminal row); mapping them onto grid cells is the model's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// A key was pressed.
    KeyDown { key: Key },
    /// A mouse event.
    Mouse { action: MouseAction, x: i32, y: i32 },
    /// The screen / terminal was resized.
    Screen { width: i32, height: i32 },
    /// Sent once when the application starts.
    Init,
    /// Request to quit.
    Quit,
}

impl Msg {
    /// Convenience: create a `KeyDown`.
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }

    /// Convenience: create a `Mouse` message.
    pub fn mouse(action: MouseAction, x: i32, y: i32) -> Self {
        Self::Mouse { action, x, y }
    }

    /// Whether this is a request to stop whatever is running: `q`, Escape
    /// or an explicit quit.
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            Self::Quit
                | Self::KeyDown {
                    key: Key::Escape | Key::Char('q'),
                }
        )
    }
}
