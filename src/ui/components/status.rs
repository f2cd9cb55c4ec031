//! Status message component renderer.
//!
//! Fills the grid area when it holds no cards: the loading indicator, the
//! no-results placeholder, informational messages and fetch errors.

use crate::app::grid::MessageKind;
use crate::ui::helpers::{fit, position_cursor, width_of};
use crate::ui::theme::Theme;

const LOADING_TEXT: &str = "Loading wallpapers...";

/// Renders `text` centered on `row`, styled by its kind.
///
/// Placeholders are dimmed, informational messages use `empty_state_fg`, and
/// errors use `error_fg` in bold.
pub fn render_message(row: usize, kind: MessageKind, text: &str, theme: &Theme, cols: usize) {
    let text = fit(text, cols);
    let text_len = width_of(&text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    match kind {
        MessageKind::Placeholder => {
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        MessageKind::Info => print!("{}", Theme::fg(&theme.colors.empty_state_fg)),
        MessageKind::Error => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.error_fg));
        }
    }
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}

/// Renders the loading indicator centered on `row`.
pub fn render_loading(row: usize, theme: &Theme, cols: usize) {
    let padding = (cols.saturating_sub(LOADING_TEXT.len())) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{LOADING_TEXT}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + LOADING_TEXT.len())));
    print!("{}", Theme::reset());
}
