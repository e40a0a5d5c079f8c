//! Composable UI component renderers.
//!
//! # Components
//!
//! - `header`: title bar
//! - `footer`: key hints
//! - `search`: input box, result list, featured picks
//! - `stats`: county summary block
//! - `table`: ranked flow tables
//! - `empty`: loading / failure message
//!
//! # Layouts
//!
//! - [`render_search_screen`]: Header + Notice + `SearchBar` + Results + Footer
//! - [`render_county_screen`]: Header + Stats + Outflows + Inflows + Footer
//!
//! Every component takes the row it starts on and returns the next free row.

mod empty;
mod footer;
mod header;
mod search;
mod stats;
mod table;

pub use empty::render_empty_state;
pub use search::NO_MATCHES_TEXT;
pub use stats::LIMITED_DATA_TEXT;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CountyViewModel, Notice, SearchPanel, UIViewModel};

use footer::render_footer;
use header::render_header;
use search::{render_search_bar, render_search_body};
use stats::render_stats;
use table::{render_table_headers, render_table_rows};

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_notice(row: usize, notice: &Notice, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.notice_fg));
    print!(" ⚠ {}", notice.message);
    print!("{}", Theme::reset());
    row + 1
}

fn render_chrome_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Search view layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Notice, if any]
/// [Search Bar - 3 lines]
/// [Results / No matches / Featured]
/// [Border]
/// [Footer]
/// ```
pub fn render_search_screen(vm: &UIViewModel, panel: &SearchPanel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_header(2, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(notice) = &vm.notice {
        current_row = render_notice(current_row, notice, theme);
    }

    current_row = render_search_bar(current_row, &panel.query, theme, cols);
    let _current_row = render_search_body(current_row, panel, theme, cols);

    render_chrome_bottom(vm, theme, cols, rows);
}

/// Results view layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Stats]
/// [Top outflows]
/// [Top inflows]
/// [Border]
/// [Footer]
/// ```
pub fn render_county_screen(vm: &UIViewModel, county: &CountyViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_header(2, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_stats(current_row + 1, county, theme);

    current_row = render_table_headers(current_row + 1, "Top destinations (leaving)", theme, cols);
    current_row = render_table_rows(current_row, &county.outflows, theme, cols);

    current_row = render_table_headers(current_row + 1, "Top origins (arriving)", theme, cols);
    let _current_row = render_table_rows(current_row, &county.inflows, theme, cols);

    render_chrome_bottom(vm, theme, cols, rows);
}
