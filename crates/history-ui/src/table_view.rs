//! Box-drawn console rendering of the payout table.
//!
//! Produces one header row, one row per pay period and a `SUM` row, framed by
//! double rules at the top, under the header and at the bottom, with a single
//! rule above the summary.

use unicode_width::UnicodeWidthStr;

use history_core::formatting::{format_currency, Locale};
use history_core::models::{PayoutTable, SummaryRow};

/// Heading of the period column.
pub const PERIOD_HEADER: &str = "Pay period";

/// Heading of the per-row total column.
pub const TOTAL_HEADER: &str = "TOTAL";

// ── Rules ─────────────────────────────────────────────────────────────────────

/// Characters for one horizontal rule: left corner, fill, junction, right corner.
struct Rule {
    left: char,
    fill: char,
    junction: char,
    right: char,
}

const TOP: Rule = Rule {
    left: '╒',
    fill: '═',
    junction: '╤',
    right: '╕',
};

const HEADER_SEPARATOR: Rule = Rule {
    left: '╞',
    fill: '═',
    junction: '╪',
    right: '╡',
};

const SUMMARY_SEPARATOR: Rule = Rule {
    left: '├',
    fill: '─',
    junction: '┼',
    right: '┤',
};

const BOTTOM: Rule = Rule {
    left: '╘',
    fill: '═',
    junction: '╧',
    right: '╛',
};

const VERTICAL: char = '│';

// ── Public API ────────────────────────────────────────────────────────────────

/// Render `table` as a multi-line string (each line newline-terminated).
pub fn render_table(table: &PayoutTable, locale: Locale) -> String {
    let header = header_cells(table);
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(row.values.len() + 2);
            cells.push(row.period.to_string());
            cells.extend(row.values.iter().map(|v| format_currency(*v, locale)));
            cells.push(format_currency(row.total, locale));
            cells
        })
        .collect();
    let summary = summary_cells(table.summary(), locale);

    let widths = column_widths(
        std::iter::once(&header)
            .chain(rows.iter())
            .chain(std::iter::once(&summary)),
    );

    let mut out = String::new();
    push_line(&mut out, &rule_line(&TOP, &widths));
    push_line(&mut out, &cell_line(&header, &widths));
    push_line(&mut out, &rule_line(&HEADER_SEPARATOR, &widths));
    for row in &rows {
        push_line(&mut out, &cell_line(row, &widths));
    }
    push_line(&mut out, &rule_line(&SUMMARY_SEPARATOR, &widths));
    push_line(&mut out, &cell_line(&summary, &widths));
    push_line(&mut out, &rule_line(&BOTTOM, &widths));
    out
}

/// Title printed above the grid.
pub fn render_title(start: &str, end: &str) -> String {
    format!("Payout across all nodes from {start} to {end}:")
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn header_cells(table: &PayoutTable) -> Vec<String> {
    let mut cells = Vec::with_capacity(table.labels().len() + 2);
    cells.push(PERIOD_HEADER.to_string());
    cells.extend(table.labels().iter().cloned());
    cells.push(TOTAL_HEADER.to_string());
    cells
}

fn summary_cells(summary: &SummaryRow, locale: Locale) -> Vec<String> {
    let mut cells = Vec::with_capacity(summary.column_totals.len() + 2);
    cells.push(SummaryRow::LABEL.to_string());
    cells.extend(
        summary
            .column_totals
            .iter()
            .map(|v| format_currency(*v, locale)),
    );
    cells.push(format_currency(summary.grand_total, locale));
    cells
}

/// Widest display width per column across all given rows.
fn column_widths<'a>(rows: impl Iterator<Item = &'a Vec<String>>) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        if widths.len() < row.len() {
            widths.resize(row.len(), 0);
        }
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn rule_line(rule: &Rule, widths: &[usize]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| rule.fill.to_string().repeat(w + 2))
        .collect();
    format!(
        "{}{}{}",
        rule.left,
        segments.join(&rule.junction.to_string()),
        rule.right
    )
}

fn cell_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| {
            let pad = w.saturating_sub(cell.width());
            format!(" {}{} ", " ".repeat(pad), cell)
        })
        .collect();
    format!("{VERTICAL}{}{VERTICAL}", padded.join(&VERTICAL.to_string()))
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

// ── Tests ──────────────────────────────────────────────────────────────────────
