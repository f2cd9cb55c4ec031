//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! It hands back a [`RenderedLayout`] so mouse clicks from the next frame can
//! be mapped to the card under the cursor.

use crate::app::{AppState, ClickTarget};
use crate::domain::WallpaperId;
use crate::ui::components::{self, GLYPH_COLUMNS};

/// Screen positions of the cards drawn by the last render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLayout {
    /// `(row, id)` pairs, rows 1-indexed.
    pub card_rows: Vec<(usize, WallpaperId)>,
    /// Whether the lightbox covered the grid.
    pub overlay: bool,
}

impl RenderedLayout {
    /// Maps a click at a 0-indexed `line` and `col` to a card.
    ///
    /// Clicks are ignored while the overlay is drawn.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wallgrid::app::ClickTarget;
    /// use wallgrid::ui::RenderedLayout;
    ///
    /// let layout = RenderedLayout { card_rows: vec![(5, 42)], overlay: false };
    /// assert_eq!(layout.hit(4, 2), Some((42, ClickTarget::FavoriteGlyph)));
    /// assert_eq!(layout.hit(4, 20), Some((42, ClickTarget::Card)));
    /// assert_eq!(layout.hit(5, 20), None);
    /// ```
    #[must_use]
    pub fn hit(&self, line: usize, col: usize) -> Option<(WallpaperId, ClickTarget)> {
        if self.overlay {
            return None;
        }
        let row = line + 1;
        let (_, id) = self.card_rows.iter().find(|(card_row, _)| *card_row == row)?;
        let target = if col < GLYPH_COLUMNS {
            ClickTarget::FavoriteGlyph
        } else {
            ClickTarget::Card
        };
        Some((*id, target))
    }
}

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and draws every component.
/// Does not clear the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) -> RenderedLayout {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let overlay = viewmodel.lightbox.is_some();

    let card_rows = components::render_layout(&viewmodel, state.theme(), cols, rows);

    RenderedLayout { card_rows, overlay }
}
