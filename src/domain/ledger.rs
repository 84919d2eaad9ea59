use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Amount, Transaction};

/// A period label paired with the amount it is reported with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAmount {
    pub period: String,
    pub amount: Amount,
}

impl PeriodAmount {
    fn of(transaction: &Transaction, amount: Amount) -> Self {
        Self {
            period: transaction.period().to_string(),
            amount,
        }
    }
}

/// Unique period labels, in the order they are first encountered.
/// Labels are compared by exact string equality.
pub fn distinct_months(transactions: &[Transaction]) -> Vec<&str> {
    let mut seen = HashSet::new();
    transactions
        .iter()
        .map(Transaction::period)
        .filter(|period| seen.insert(*period))
        .collect()
}

pub fn count_distinct_months(transactions: &[Transaction]) -> usize {
    distinct_months(transactions).len()
}

/// Net total of all amounts.
/// Accumulated left to right so float rounding matches the input order.
pub fn net_total(transactions: &[Transaction]) -> Result<Amount, AnalysisError> {
    ensure_not_empty(transactions)?;
    let total = transactions
        .iter()
        .fold(0.0, |total, transaction| total + transaction.amount());
    ensure_finite("net total", total)
}

/// Differences between index-adjacent amounts: `amount[i] - amount[i - 1]` for `i` in `1..n`.
/// Adjacency is positional; period labels are not consulted.
pub fn rate_of_change(transactions: &[Transaction]) -> Vec<Amount> {
    transactions
        .windows(2)
        .map(|pair| pair[1].amount() - pair[0].amount())
        .collect()
}

/// Sum of the rate-of-change sequence divided by `distinct months - 1`.
///
/// The divisor counts distinct period labels, not adjacent pairs, so datasets
/// with repeated labels average over fewer steps than they have.
pub fn average_change(transactions: &[Transaction]) -> Result<Amount, AnalysisError> {
    ensure_not_empty(transactions)?;
    let months = count_distinct_months(transactions);
    if months <= 1 {
        return Err(AnalysisError::DegenerateMonthCount { months });
    }

    let changes = finite_rate_of_change(transactions)?
        .iter()
        .fold(0.0, |sum, change| sum + change);
    ensure_finite("average change", changes / (months - 1) as Amount)
}

/// Largest rate-of-change entry, reported with the period of the later transaction.
/// The leftmost maximum wins on ties.
pub fn greatest_increase(transactions: &[Transaction]) -> Result<PeriodAmount, AnalysisError> {
    ensure_not_empty(transactions)?;

    let mut best: Option<(usize, Amount)> = None;
    for (i, change) in finite_rate_of_change(transactions)?.into_iter().enumerate() {
        if best.is_none_or(|(_, max)| change > max) {
            best = Some((i, change));
        }
    }

    // No adjacent pair means a single transaction, hence a single month
    let (i, change) = best.ok_or(AnalysisError::DegenerateMonthCount { months: 1 })?;
    Ok(PeriodAmount::of(&transactions[i + 1], change))
}

/// Transaction with the smallest raw amount. The leftmost minimum wins on ties.
///
/// Unlike [`greatest_increase`] this looks at raw amounts rather than at the
/// rate-of-change sequence.
pub fn greatest_decrease(transactions: &[Transaction]) -> Result<PeriodAmount, AnalysisError> {
    let mut lowest = transactions.first().ok_or(AnalysisError::EmptyDataset)?;
    for transaction in &transactions[1..] {
        if transaction.amount() < lowest.amount() {
            lowest = transaction;
        }
    }

    Ok(PeriodAmount::of(lowest, lowest.amount()))
}

/// Rate of change that fails when a difference of two finite amounts overflows.
fn finite_rate_of_change(transactions: &[Transaction]) -> Result<Vec<Amount>, AnalysisError> {
    rate_of_change(transactions)
        .into_iter()
        .map(|change| ensure_finite("rate of change", change))
        .collect()
}

fn ensure_finite(metric: &'static str, value: Amount) -> Result<Amount, AnalysisError> {
    if !value.is_finite() {
        return Err(AnalysisError::NonFiniteResult { metric });
    }
    Ok(value)
}

fn ensure_not_empty(transactions: &[Transaction]) -> Result<(), AnalysisError> {
    if transactions.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    EmptyDataset,
    DegenerateMonthCount { months: usize },
    /// An aggregate overflowed the float range
    NonFiniteResult { metric: &'static str },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::EmptyDataset => {
                write!(f, "Dataset is empty: no transactions to analyze")
            }
            AnalysisError::DegenerateMonthCount { months } => {
                write!(
                    f,
                    "Average change needs at least 2 distinct months, found {}",
                    months
                )
            }
            AnalysisError::NonFiniteResult { metric } => {
                write!(f, "The {} is out of the representable range", metric)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
