//! Lightbox overlay component renderer.
//!
//! Draws a bordered box over the grid area with the previewed wallpaper's
//! details and its favorite state.

use crate::ui::helpers::{fit, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LightboxInfo;

/// Horizontal margin between the pane edge and the box.
const LIGHTBOX_MARGIN: usize = 3;

/// Renders the overlay between `top` and `bottom` (inclusive rows).
pub fn render_lightbox(top: usize, bottom: usize, info: &LightboxInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(LIGHTBOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    if inner_width == 0 || bottom <= top + 1 {
        return;
    }

    let title = fit(&format!(" {} ", info.title), inner_width);
    let title_len = width_of(&title);
    position_cursor(top, 1);
    print!("{}", " ".repeat(LIGHTBOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.lightbox_border));
    print!("┌");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.lightbox_border));
    print!("{}┐", "─".repeat(inner_width.saturating_sub(title_len)));
    print!("{}", Theme::reset());

    let favorite_line = if info.is_favorite {
        "★ In your favorites"
    } else {
        "☆ Not in your favorites"
    };

    let lines = [
        (format!(" {favorite_line}"), &theme.colors.favorite_fg),
        (String::new(), &theme.colors.text_normal),
        (format!(" Category:  {}", info.category), &theme.colors.category_fg),
        (format!(" Tags:      {}", info.tags), &theme.colors.text_normal),
        (format!(" Author:    {}", info.author), &theme.colors.text_normal),
        (
            format!(" Downloads: {}   Likes: {}", info.downloads, info.favorites),
            &theme.colors.text_normal,
        ),
        (String::new(), &theme.colors.text_normal),
        (format!(" Image: {}", info.image_url), &theme.colors.text_dim),
        (format!(" Page:  {}", info.page_url), &theme.colors.text_dim),
    ];

    for row in top + 1..bottom {
        let (text, color) = lines
            .get(row - top - 1)
            .map_or((String::new(), &theme.colors.text_normal), |(text, color)| {
                (fit(text, inner_width), *color)
            });

        position_cursor(row, 1);
        print!("{}", " ".repeat(LIGHTBOX_MARGIN));
        print!("{}", Theme::fg(&theme.colors.lightbox_border));
        print!("│");
        print!("{}", Theme::fg(color));
        print!("{text}");
        print!("{}", " ".repeat(inner_width.saturating_sub(width_of(&text))));
        print!("{}", Theme::fg(&theme.colors.lightbox_border));
        print!("│");
        print!("{}", Theme::reset());
    }

    position_cursor(bottom, 1);
    print!("{}", " ".repeat(LIGHTBOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.lightbox_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}
