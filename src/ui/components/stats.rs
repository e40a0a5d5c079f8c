//! County summary block: net migration, average incomes, household totals.

use crate::ui::format::Polarity;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CountyViewModel;

/// Caveat shown for records with few flows.
pub const LIMITED_DATA_TEXT: &str = "Limited data available for this county.";

const LABEL_WIDTH: usize = 22;

fn render_stat(row: usize, label: &str, value: &str, color: &str, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" {label:<LABEL_WIDTH$}");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print!("{value}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the summary lines for `county`; returns the next free row.
pub fn render_stats(row: usize, county: &CountyViewModel, theme: &Theme) -> usize {
    let mut current_row = row;

    if let Some(year) = &county.year {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" IRS migration data, {year}");
        print!("{}", Theme::reset());
        current_row += 2;
    }

    let net_color = match county.polarity {
        Polarity::Positive => &theme.colors.positive_fg,
        Polarity::Negative => &theme.colors.negative_fg,
    };
    current_row = render_stat(current_row, "Net migration", &county.net_migration, net_color, theme);
    current_row = render_stat(current_row, "Avg. AGI leaving", &county.agi_leaving, &theme.colors.text_normal, theme);
    current_row = render_stat(current_row, "Avg. AGI arriving", &county.agi_arriving, &theme.colors.text_normal, theme);

    if let Some(total) = &county.total_leaving {
        current_row = render_stat(current_row, "Households leaving", total, &theme.colors.text_normal, theme);
    }
    if let Some(total) = &county.total_arriving {
        current_row = render_stat(current_row, "Households arriving", total, &theme.colors.text_normal, theme);
    }

    if county.limited_data {
        current_row += 1;
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.notice_fg));
        print!(" {LIMITED_DATA_TEXT}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
