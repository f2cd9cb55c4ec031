//! Card list component renderer.
//!
//! Cards are drawn one per row: favorite glyph, title, category label. The
//! title column has a fixed width so category labels line up.

use crate::domain::WallpaperId;
use crate::ui::helpers::{self, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayCard;

/// Columns occupied by the indent and the favorite glyph.
///
/// A click inside these columns targets the glyph rather than the card.
pub const GLYPH_COLUMNS: usize = 4;

/// Width of the title column, including its trailing gap.
const TITLE_COLUMN: usize = 42;

const FAVORITE_GLYPH: &str = "★";
const NOT_FAVORITE_GLYPH: &str = "☆";

/// Renders all cards starting at the specified row.
///
/// # Returns
///
/// The row of each card, in display order, for click hit-testing.
pub fn render_cards(
    row: usize,
    cards: &[DisplayCard],
    theme: &Theme,
    cols: usize,
) -> Vec<(usize, WallpaperId)> {
    cards
        .iter()
        .enumerate()
        .map(|(offset, card)| {
            let card_row = row + offset;
            render_card(card_row, card, theme, cols);
            (card_row, card.id)
        })
        .collect()
}

/// Renders a single card row.
///
/// # Layout
///
/// ```text
///   ★ title (up to 40 chars)                  category [padding to fill line]
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
fn render_card(row: usize, card: &DisplayCard, theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    let base_fg = if card.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    print!("  ");
    if card.is_favorite {
        print!("{}{FAVORITE_GLYPH}", Theme::fg(&theme.colors.favorite_fg));
    } else {
        print!("{}{NOT_FAVORITE_GLYPH}", Theme::fg(&theme.colors.text_dim));
    }
    print!(" ");

    print!("{}", Theme::fg(base_fg));
    helpers::render_highlighted_text(&card.title, &card.highlight_ranges, theme, card.is_selected);
    if card.is_selected {
        // highlight resets clear the selection background
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    let title_len = width_of(&card.title);
    print!("{}", " ".repeat(TITLE_COLUMN.saturating_sub(title_len)));

    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.category_fg));
    }
    print!("{}", card.category);

    let line_len = GLYPH_COLUMNS + TITLE_COLUMN.max(title_len) + width_of(&card.category);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
}
