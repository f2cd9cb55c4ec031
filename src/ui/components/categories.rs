//! Category bar component renderer.
//!
//! One row of filter chips, `all` first, followed by the favorites chip. The
//! active chip is drawn with the active filter colors. Chips that do not fit
//! the pane width are dropped from the right.

use crate::ui::helpers::{position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CategoryBarInfo;

const FAVORITES_CHIP: &str = " ★ favorites ";

/// Renders the category bar at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_category_bar(row: usize, bar: &CategoryBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    let chips = bar
        .chips
        .iter()
        .map(|chip| (format!(" {} ", chip.label), chip.is_active))
        .chain(std::iter::once((FAVORITES_CHIP.to_string(), bar.favorites_active)));

    for (text, is_active) in chips {
        let chip_len = width_of(&text) + 1;
        if used + chip_len > cols {
            break;
        }

        if is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.active_filter_fg));
            print!("{}", Theme::bg(&theme.colors.active_filter_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{text}");
        print!("{} ", Theme::reset());

        used += chip_len;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
