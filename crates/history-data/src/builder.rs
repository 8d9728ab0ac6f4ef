//! Periods × nodes payout table construction.

use history_core::config::NodeEndpoint;
use history_core::models::{PayoutRow, PayoutTable, SummaryRow};
use history_core::period::Period;
use tracing::info;

use crate::fetcher::PayoutSource;

/// Query `source` once per (period, node) cell and assemble the table.
///
/// Periods are visited in the order given and nodes in column order; each
/// cell is fetched exactly once. The summary row holds the per-node totals
/// and their sum.
pub fn build_table<S>(
    periods: impl IntoIterator<Item = Period>,
    nodes: &[NodeEndpoint],
    source: &S,
) -> PayoutTable
where
    S: PayoutSource + ?Sized,
{
    let mut column_totals = vec![0.0; nodes.len()];
    let mut rows = Vec::new();
    let mut unconfirmed_cells = 0;

    for period in periods {
        let mut values = Vec::with_capacity(nodes.len());
        let mut total = 0.0;

        for (column, node) in nodes.iter().enumerate() {
            let reading = source.fetch(node, period);
            if !reading.fetched {
                unconfirmed_cells += 1;
            }
            values.push(reading.amount);
            column_totals[column] += reading.amount;
            total += reading.amount;
        }

        rows.push(PayoutRow {
            period,
            values,
            total,
        });
    }

    let grand_total: f64 = column_totals.iter().sum();
    info!(
        periods = rows.len(),
        nodes = nodes.len(),
        grand_total,
        "payout table built"
    );

    PayoutTable::new(
        nodes.iter().map(|n| n.label.clone()).collect(),
        rows,
        SummaryRow {
            column_totals,
            grand_total,
        },
        unconfirmed_cells,
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use history_core::models::PayoutReading;
    use history_core::period::months;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Answers from a fixed `(port, period) -> reading` map; anything else fails.
    struct StubSource {
        readings: HashMap<(u16, String), PayoutReading>,
        calls: RefCell<Vec<(u16, String)>>,
    }

    impl StubSource {
        fn new(entries: &[(u16, &str, f64)]) -> Self {
            Self {
                readings: entries
                    .iter()
                    .map(|&(port, period, amount)| {
                        ((port, period.to_string()), PayoutReading::fetched(amount))
                    })
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PayoutSource for StubSource {
        fn fetch(&self, node: &NodeEndpoint, period: Period) -> PayoutReading {
            let key = (node.port, period.to_string());
            self.calls.borrow_mut().push(key.clone());
            self.readings
                .get(&key)
                .copied()
                .unwrap_or_else(PayoutReading::failed)
        }
    }

    fn nodes() -> Vec<NodeEndpoint> {
        vec![NodeEndpoint::new(1, "alpha"), NodeEndpoint::new(2, "beta")]
    }

    fn p(s: &str) -> Period {
        s.parse().unwrap()
    }

    #[test]
    fn test_two_by_two_rows_and_summary() {
        let source = StubSource::new(&[
            (1, "2024-01", 10.0),
            (2, "2024-01", 20.0),
            (1, "2024-02", 5.0),
            (2, "2024-02", 0.0),
        ]);

        let table = build_table(months(p("2024-01"), p("2024-02")), &nodes(), &source);

        assert_eq!(table.labels(), ["alpha".to_string(), "beta".to_string()]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].period, p("2024-01"));
        assert_eq!(table.rows()[0].values, vec![10.0, 20.0]);
        assert_eq!(table.rows()[0].total, 30.0);
        assert_eq!(table.rows()[1].values, vec![5.0, 0.0]);
        assert_eq!(table.rows()[1].total, 5.0);
        assert_eq!(table.summary().column_totals, vec![15.0, 20.0]);
        assert_eq!(table.summary().grand_total, 35.0);
        assert_eq!(table.unconfirmed_cells(), 0);
    }

    #[test]
    fn test_fetch_order_is_period_major() {
        let source = StubSource::new(&[]);
        build_table(months(p("2023-12"), p("2024-01")), &nodes(), &source);

        let calls = source.calls.borrow();
        assert_eq!(
            *calls,
            vec![
                (1, "2023-12".to_string()),
                (2, "2023-12".to_string()),
                (1, "2024-01".to_string()),
                (2, "2024-01".to_string()),
            ]
        );
    }

    #[test]
    fn test_failed_cells_are_zero_and_counted() {
        let source = StubSource::new(&[(1, "2024-01", 7.25)]);

        let table = build_table(months(p("2024-01"), p("2024-02")), &nodes(), &source);

        assert_eq!(table.rows()[0].values, vec![7.25, 0.0]);
        assert_eq!(table.rows()[1].values, vec![0.0, 0.0]);
        assert_eq!(table.unconfirmed_cells(), 3);
        assert_eq!(table.summary().grand_total, 7.25);
    }

    #[test]
    fn test_grand_total_cross_checks() {
        let source = StubSource::new(&[
            (1, "2024-01", 1.11),
            (2, "2024-01", 2.22),
            (1, "2024-02", 3.33),
            (2, "2024-02", 4.44),
            (1, "2024-03", 5.55),
            (2, "2024-03", 6.66),
        ]);

        let table = build_table(months(p("2024-01"), p("2024-03")), &nodes(), &source);

        let by_rows: f64 = table.rows().iter().map(|r| r.total).sum();
        let by_columns: f64 = table.summary().column_totals.iter().sum();
        assert!((table.summary().grand_total - by_rows).abs() < 1e-9);
        assert!((table.summary().grand_total - by_columns).abs() < 1e-9);
        for row in table.rows() {
            let sum: f64 = row.values.iter().sum();
            assert!((row.total - sum).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_period_range() {
        let source = StubSource::new(&[]);

        let table = build_table(months(p("2024-02"), p("2024-01")), &nodes(), &source);

        assert!(table.rows().is_empty());
        assert_eq!(table.summary().column_totals, vec![0.0, 0.0]);
        assert_eq!(table.summary().grand_total, 0.0);
        assert!(source.calls.borrow().is_empty());
    }
}
