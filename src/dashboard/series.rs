//! Turns transactions into the points of a line chart.

use time::Date;

use crate::transaction::Transaction;

/// Which values the chart plots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartPolicy {
    /// Cumulative spending, one point per transaction.
    #[default]
    RunningTotal,
    /// The amounts of the `n` most recent transactions.
    Recent(usize),
}

/// One point on the spending chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// The day the transaction was created.
    pub date: Date,
    /// The value to plot for this point.
    pub amount: f64,
}

/// Derive the chart series for `transactions` in chronological order.
///
/// Transactions created at the same instant are ordered by ID.
pub fn derive_series(transactions: &[Transaction], policy: ChartPolicy) -> Vec<SeriesPoint> {
    let mut chronological: Vec<&Transaction> = transactions.iter().collect();
    chronological.sort_by_key(|transaction| (transaction.created_at, transaction.id));

    match policy {
        ChartPolicy::RunningTotal => {
            let mut total = 0.0;
            chronological
                .into_iter()
                .map(|transaction| {
                    total += transaction.amount;
                    SeriesPoint {
                        date: transaction.created_at.date(),
                        amount: total,
                    }
                })
                .collect()
        }
        ChartPolicy::Recent(count) => {
            let skip = chronological.len().saturating_sub(count);
            chronological
                .into_iter()
                .skip(skip)
                .map(|transaction| SeriesPoint {
                    date: transaction.created_at.date(),
                    amount: transaction.amount,
                })
                .collect()
        }
    }
}
