//! Input mode state for the application.
//!
//! The plugin reads keys in one of two modes:
//! - **Normal**: Grid navigation, category and favorites commands
//! - **Search**: Keys edit the search text until Enter or Esc
//!
//! The lightbox is not a mode of its own. It overlays the grid in Normal mode
//! and suspends grid navigation while open.

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and whether the search bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), enter (preview), f (favorite),
    /// F (favorites view), [ and ] (category), / (search), t (theme), q (quit).
    #[default]
    Normal,

    /// Search text is being edited.
    ///
    /// Printable keys append to the search text. Enter submits, Esc cancels.
    Search,
}
