use serde::{Deserialize, Serialize};

use super::Amount;

/// One monthly ledger entry: a period label and the net profit/loss booked for it.
/// Transactions are immutable once created; the analyzer only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Month label in `M-Y` form (e.g. "Jan-2022"). Compared for equality only.
    period: String,
    /// Net profit (positive) or loss (negative)
    amount: Amount,
}

impl Transaction {
    pub fn new(period: impl Into<String>, amount: Amount) -> Self {
        Self {
            period: period.into(),
            amount,
        }
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl<S: Into<String>> From<(S, Amount)> for Transaction {
    fn from((period, amount): (S, Amount)) -> Self {
        Self::new(period, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_accessors() {
        let tx = Transaction::new("Jan-2022", -1196225.0);
        assert_eq!(tx.period(), "Jan-2022");
        assert_eq!(tx.amount(), -1196225.0);
    }

    #[test]
    fn test_transaction_from_pair() {
        let tx: Transaction = ("Feb-2022", 400.0).into();
        assert_eq!(tx, Transaction::new("Feb-2022", 400.0));
    }
}
