//! Low-level rendering helpers shared by components.
//!
//! All widths are counted in characters, not bytes; county names and titles
//! carry non-ASCII text (`—`, `ñ`, `…`).

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Character count of `text`.
#[must_use]
pub fn visual_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters.
#[must_use]
pub fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Prints `text` centered in a line of `cols` characters.
pub fn print_centered(text: &str, cols: usize) {
    let text = clip(text, cols);
    let len = visual_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Prints `text` with the character ranges in `ranges` highlighted.
///
/// Highlighting is skipped for selected rows so the selection colors stay
/// readable. Ranges are `(start, end)` character indices, end exclusive.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut position = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < position || start >= end {
            continue;
        }

        let plain: String = chars[position..start].iter().collect();
        print!("{plain}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let marked: String = chars[start..end].iter().collect();
        print!("{marked}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        position = end;
    }

    let rest: String = chars[position..].iter().collect();
    print!("{rest}");
}
