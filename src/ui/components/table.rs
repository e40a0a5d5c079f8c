//! Ranked flow tables (top outflows, top inflows).
//!
//! ```text
//! #   COUNTY                              HOUSEHOLDS      AVG AGI
//! 1   Delaware County, PA                      5,100      $68,000
//! ```

use crate::ui::helpers::{clip, position_cursor, visual_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FlowRow;

const RANK_WIDTH: usize = 4;
const NUMBER_WIDTH: usize = 13;

fn name_width(cols: usize) -> usize {
    cols.saturating_sub(RANK_WIDTH + NUMBER_WIDTH * 2 + 2).max(12)
}

/// Renders the table caption and column headings; returns the next free row.
pub fn render_table_headers(row: usize, caption: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" {caption}");
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(
        " {:<rank$}{:<name$}{:>num$}{:>num$}",
        "#",
        "COUNTY",
        "HOUSEHOLDS",
        "AVG AGI",
        rank = RANK_WIDTH,
        name = name_width(cols),
        num = NUMBER_WIDTH
    );
    print!("{}", Theme::reset());
    row + 2
}

/// Renders every row, or a dimmed placeholder for an empty table.
pub fn render_table_rows(row: usize, rows: &[FlowRow], theme: &Theme, cols: usize) -> usize {
    if rows.is_empty() {
        position_cursor(row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" No flows reported");
        print!("{}", Theme::reset());
        return row + 1;
    }

    let mut current_row = row;
    for flow in rows {
        current_row = render_table_row(current_row, flow, theme, cols);
    }
    current_row
}

/// One row. Selection wins over link coloring; links are underlined.
fn render_table_row(row: usize, flow: &FlowRow, theme: &Theme, cols: usize) -> usize {
    let width = name_width(cols);

    position_cursor(row, 1);
    if flow.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" {:<rank$}", flow.rank, rank = RANK_WIDTH);

    let name = clip(&flow.counterpart_name, width.saturating_sub(1));
    if flow.is_link && !flow.is_selected {
        print!("{}{}", Theme::fg(&theme.colors.link_fg), Theme::underline());
        print!("{name}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{name}");
    }
    print!("{}", " ".repeat(width.saturating_sub(visual_width(&name))));

    print!("{:>num$}{:>num$}", flow.households, flow.avg_agi, num = NUMBER_WIDTH);

    let used = 1 + RANK_WIDTH + width + NUMBER_WIDTH * 2;
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
