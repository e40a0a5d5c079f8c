//! Centered message screen (loading, load failure).

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message on row 6 and the dimmed subtitle, if any, on row 7.
///
/// ```text
/// [5 blank lines]
///            Loading migration data…
///          <subtitle, e.g. the load error>
/// ```
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(6, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered(&empty.message, cols);
    print!("{}", Theme::reset());

    if empty.subtitle.is_empty() {
        return;
    }

    position_cursor(7, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&empty.subtitle, cols);
    print!("{}", Theme::reset());
}
