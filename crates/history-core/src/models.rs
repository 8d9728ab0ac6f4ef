//! Payout table model shared by the builder and the presenters.

use crate::period::Period;

// ── PayoutReading ─────────────────────────────────────────────────────────────

/// Result of asking one node for one period's payout.
///
/// `fetched == false` marks a fallback zero produced by a failed request.
/// The rendered report does not distinguish the two cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoutReading {
    /// Payout in display units (dollars).
    pub amount: f64,
    /// Whether the node actually answered with a usable body.
    pub fetched: bool,
}

impl PayoutReading {
    pub fn fetched(amount: f64) -> Self {
        Self {
            amount,
            fetched: true,
        }
    }

    pub fn failed() -> Self {
        Self {
            amount: 0.0,
            fetched: false,
        }
    }
}

// ── PayoutRow ─────────────────────────────────────────────────────────────────

/// Payouts of every node for a single pay period.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutRow {
    pub period: Period,
    /// One amount per node, in node order.
    pub values: Vec<f64>,
    /// Sum of `values`.
    pub total: f64,
}

// ── SummaryRow ────────────────────────────────────────────────────────────────

/// The `SUM` row: per-node totals across every period plus the grand total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryRow {
    pub column_totals: Vec<f64>,
    pub grand_total: f64,
}

impl SummaryRow {
    /// Label shown in the period column of the summary row.
    pub const LABEL: &'static str = "SUM";
}

// ── PayoutTable ───────────────────────────────────────────────────────────────

/// Periods × nodes payout grid with its summary row. Never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutTable {
    labels: Vec<String>,
    rows: Vec<PayoutRow>,
    summary: SummaryRow,
    unconfirmed_cells: usize,
}

impl PayoutTable {
    pub fn new(
        labels: Vec<String>,
        rows: Vec<PayoutRow>,
        summary: SummaryRow,
        unconfirmed_cells: usize,
    ) -> Self {
        Self {
            labels,
            rows,
            summary,
            unconfirmed_cells,
        }
    }

    /// Node labels in column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// One row per period, oldest first.
    pub fn rows(&self) -> &[PayoutRow] {
        &self.rows
    }

    pub fn summary(&self) -> &SummaryRow {
        &self.summary
    }

    /// Number of cells whose value is a failure fallback rather than a node answer.
    pub fn unconfirmed_cells(&self) -> usize {
        self.unconfirmed_cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_constructors() {
        assert_eq!(
            PayoutReading::fetched(1.5),
            PayoutReading {
                amount: 1.5,
                fetched: true
            }
        );
        let failed = PayoutReading::failed();
        assert_eq!(failed.amount, 0.0);
        assert!(!failed.fetched);
    }

    #[test]
    fn test_table_accessors() {
        let period: Period = "2024-01".parse().unwrap();
        let table = PayoutTable::new(
            vec!["a".to_string()],
            vec![PayoutRow {
                period,
                values: vec![2.0],
                total: 2.0,
            }],
            SummaryRow {
                column_totals: vec![2.0],
                grand_total: 2.0,
            },
            0,
        );
        assert_eq!(table.labels(), ["a".to_string()]);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.summary().grand_total, 2.0);
        assert_eq!(table.unconfirmed_cells(), 0);
        assert!(!table.rows().is_empty());
    }
}
