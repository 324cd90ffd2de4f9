//! Terminal chart rendering for projection series.
//!
//! Renders one stacked bar per year (principal portion, then interest
//! portion) scaled to the widest total, the terminal stand-in for the
//! site's area chart. Rows are plain data; color is applied only at print
//! time so layout stays testable.

use crate::{locale::Locale, projection::ProjectionPoint};
use colored::Colorize;

/// Minimum chart bar width in characters
const MIN_BAR_WIDTH: usize = 10;
/// Maximum chart bar width in characters
const MAX_BAR_WIDTH: usize = 40;

/// One renderable chart row: cell counts per segment plus labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow {
    pub year: u32,
    /// Cells of the principal segment.
    pub principal_cells: usize,
    /// Cells of the interest segment, stacked after the principal.
    pub interest_cells: usize,
    /// Formatted total balance, e.g. "$1,234,567".
    pub label: String,
}

/// Lay out a projection series as chart rows.
///
/// The widest total fills `width` cells; every other bar is scaled
/// proportionally. Segment cells are derived from the rounded point
/// values, so a zero-interest year shows no interest cells.
pub fn layout(series: &[ProjectionPoint], locale: Locale, width: usize) -> Vec<ChartRow> {
    let width = width.clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);
    let max_total = series.iter().map(|p| p.total).max().unwrap_or(0).max(0);

    series
        .iter()
        .map(|point| {
            let (principal_cells, interest_cells) = if max_total == 0 {
                (0, 0)
            } else {
                let total_cells = (point.total.max(0) as usize * width) / max_total as usize;
                let principal_cells = if point.total > 0 {
                    (point.principal.max(0) as usize * total_cells) / point.total as usize
                } else {
                    0
                };
                (principal_cells, total_cells.saturating_sub(principal_cells))
            };

            ChartRow {
                year: point.year,
                principal_cells,
                interest_cells,
                label: format_currency(point.total, locale),
            }
        })
        .collect()
}

/// Print chart rows with colored segments.
pub fn print(rows: &[ChartRow]) {
    for row in rows {
        let principal = "█".repeat(row.principal_cells);
        let interest = "█".repeat(row.interest_cells);
        println!(
            "{:>4}  {}{} {}",
            row.year,
            principal.bright_blue(),
            interest.bright_green(),
            row.label
        );
    }
}

/// Format a whole currency amount with thousands separators and the
/// locale's currency symbol. Negative amounts keep the sign before the
/// symbol, e.g. "-$1,000".
pub fn format_currency(amount: i64, locale: Locale) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!(
        "{sign}{}{}",
        locale.currency_symbol(),
        group_thousands(amount.unsigned_abs())
    )
}

/// Insert comma separators every three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    let leading = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - leading) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
