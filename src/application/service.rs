use tracing::{debug, warn};

use crate::domain::{
    average_change, count_distinct_months, greatest_decrease, greatest_increase, net_total,
    AnalysisError, Transaction,
};

use super::{AppError, DatasetCheck, Summary};

/// Analyzer over an ordered dataset of monthly transactions.
/// This is the primary interface for any client (CLI, tests, embedding code).
///
/// The dataset is borrowed for the analyzer's lifetime and never modified, so
/// repeated runs over the same slice produce identical summaries.
pub struct LedgerAnalyzer<'a> {
    transactions: &'a [Transaction],
}

impl<'a> LedgerAnalyzer<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &'a [Transaction] {
        self.transactions
    }

    /// Check every precondition of a full summary without computing it.
    /// Issues are listed in the order [`summarize`](Self::summarize) reports them.
    pub fn check(&self) -> DatasetCheck {
        let transaction_count = self.transactions.len();
        let month_count = count_distinct_months(self.transactions);

        let net = net_total(self.transactions);

        let mut issues = Vec::new();
        if transaction_count == 0 {
            issues.push(AnalysisError::EmptyDataset);
        } else if month_count <= 1 {
            issues.push(AnalysisError::DegenerateMonthCount {
                months: month_count,
            });
        }
        if let Err(overflow @ AnalysisError::NonFiniteResult { .. }) = &net {
            issues.push(overflow.clone());
        }

        DatasetCheck {
            transaction_count,
            month_count,
            net_total: net.ok(),
            issues,
        }
    }

    /// Compute the full summary.
    ///
    /// All preconditions are validated before any aggregate is computed; the
    /// first violated one is returned and no partial summary is produced.
    pub fn summarize(&self) -> Result<Summary, AppError> {
        let check = self.check();
        if let Some(issue) = check.issues.into_iter().next() {
            debug!(%issue, "dataset rejected");
            return Err(issue.into());
        }

        if check.month_count != check.transaction_count {
            warn!(
                transactions = check.transaction_count,
                months = check.month_count,
                "repeated period labels: average change divides by distinct months, not by adjacent pairs"
            );
        }

        let summary = Summary {
            total_transactions: check.transaction_count,
            total_months: check.month_count,
            total: net_total(self.transactions)?,
            average_change: average_change(self.transactions)?,
            greatest_increase: greatest_increase(self.transactions)?,
            greatest_decrease: greatest_decrease(self.transactions)?,
        };

        debug!(
            total = summary.total,
            average_change = summary.average_change,
            "ledger analyzed"
        );

        Ok(summary)
    }
}
