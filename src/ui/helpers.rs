//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used across UI components: cursor positioning, width-aware
//! truncation, and search match highlighting with proper ANSI reset handling.
//! Widths are counted in characters, not bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `width` characters, marking cuts with `...`.
///
/// # Example
///
/// ```rust
/// use wallgrid::ui::helpers::fit;
///
/// assert_eq!(fit("mountains", 20), "mountains");
/// assert_eq!(fit("mountains", 6), "mou...");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Character count of `text`.
#[must_use]
pub fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices with exclusive end. Ranges that
/// reach past the text are clipped. When `is_selected` is `true`, match
/// highlighting is disabled to avoid conflicting with selection colors.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("ñandú", 5), "ñandú");
        assert_eq!(fit("ñandú salvaje", 8), "ñandú...");
        assert_eq!(fit("abc", 2), "ab");
        assert_eq!(width_of("★ x"), 3);
    }
}
