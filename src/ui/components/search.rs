//! Search surface: input box, result list and featured picks.

use crate::ui::helpers::{self, position_cursor, visual_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FeaturedItem, ResultItem, SearchPanel, SearchResults};

/// Horizontal margin around the input box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Placeholder row for a qualifying query without matches.
pub const NO_MATCHES_TEXT: &str = "No counties found";

/// Renders the 3-line bordered input box and returns the next free row.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Search: cook         │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, query: &str, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}");
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let label = " Search: ";
    let query_width = inner_width.saturating_sub(label.len() + 1);
    let query_text = helpers::clip(query, query_width);
    let padding = inner_width.saturating_sub(label.len() + visual_width(&query_text) + 1);

    position_cursor(row + 1, 1);
    print!("{margin}");
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{label}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{query_text}");
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("▏");
    print!("{}", " ".repeat(padding));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}");
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders whatever sits under the input box and returns the next free row.
///
/// - active search: the result rows, or the no-matches placeholder
/// - otherwise: the featured picks, if any
pub fn render_search_body(row: usize, panel: &SearchPanel, theme: &Theme, cols: usize) -> usize {
    match &panel.results {
        SearchResults::Matches(items) => render_results(row, items, theme, cols),
        SearchResults::NoMatches => {
            position_cursor(row, 1);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}{NO_MATCHES_TEXT}", " ".repeat(SEARCH_BOX_MARGIN + 2));
            print!("{}", Theme::reset());
            row + 1
        }
        SearchResults::Inactive => render_featured(row, &panel.featured, theme, cols),
    }
}

fn render_results(row: usize, items: &[ResultItem], theme: &Theme, cols: usize) -> usize {
    let indent = SEARCH_BOX_MARGIN + 1;
    let width = cols.saturating_sub(indent * 2);
    let mut current_row = row;

    for item in items {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(indent));

        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        print!(" ");
        helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
        print!("{}", " ".repeat(width.saturating_sub(visual_width(&item.name) + 1)));
        print!("{}", Theme::reset());

        current_row += 1;
    }

    current_row
}

fn render_featured(row: usize, featured: &[FeaturedItem], theme: &Theme, cols: usize) -> usize {
    if featured.is_empty() {
        return row;
    }

    let indent = " ".repeat(SEARCH_BOX_MARGIN + 2);

    position_cursor(row + 1, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{indent}FEATURED");
    print!("{}", Theme::reset());

    let mut current_row = row + 2;
    for item in featured {
        position_cursor(current_row, 1);
        print!("{indent}");
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        print!("{:<4}", item.key);
        print!("{}", Theme::fg(&theme.colors.link_fg));
        print!("{}", helpers::clip(&item.name, cols.saturating_sub(indent.len() + 4)));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
