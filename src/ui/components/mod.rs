//! Composable UI component renderers.
//!
//! Each component renders one part of the interface and returns the next free
//! row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with the active view and result count
//! - [`categories`]: Category filter chips and the favorites chip
//! - [`search`]: Search input box (border, query text)
//! - [`cards`]: Wallpaper cards, one per row
//! - [`status`]: Loading indicator and grid messages
//! - [`lightbox`]: Detail overlay for the previewed wallpaper
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Category bar]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Cards or status message]
//! [Border]
//! [Footer]
//! ```

mod cards;
mod categories;
mod footer;
mod header;
mod lightbox;
mod search;
mod status;

pub use cards::GLYPH_COLUMNS;

use crate::domain::WallpaperId;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use cards::render_cards;
use categories::render_category_bar;
use footer::render_footer;
use header::render_header;
use lightbox::render_lightbox;
use search::render_search_bar;
use status::{render_loading, render_message};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout and returns the row of each drawn card.
///
/// The grid area spans from below the chrome to the row above the bottom
/// border. When a lightbox is present it covers the grid area and no card
/// rows are reported.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) -> Vec<(usize, WallpaperId)> {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_category_bar(current_row, &vm.categories, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let body_end = border_row.saturating_sub(1);

    let mut card_rows = Vec::new();
    if let Some(info) = &vm.lightbox {
        render_lightbox(current_row, body_end, info, theme, cols);
    } else if body_end >= current_row {
        match &vm.body {
            BodyView::Blank => {}
            BodyView::Loading => render_loading(current_row + 1, theme, cols),
            BodyView::Message { kind, text } => render_message(current_row + 1, *kind, text, theme, cols),
            BodyView::Cards { items, .. } => {
                card_rows = render_cards(current_row, items, theme, cols);
            }
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    card_rows
}
