use serde::{Deserialize, Serialize};

use crate::domain::{AnalysisError, Amount, CurrencyFormatter, PeriodAmount};

/// Width of the horizontal rules framing the text report
pub const REPORT_RULE_WIDTH: usize = 72;

/// Aggregate result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_transactions: usize,
    /// Distinct period labels
    pub total_months: usize,
    pub total: Amount,
    pub average_change: Amount,
    pub greatest_increase: PeriodAmount,
    pub greatest_decrease: PeriodAmount,
}

/// Result of checking a dataset without producing a summary
#[derive(Debug, Clone)]
pub struct DatasetCheck {
    pub transaction_count: usize,
    pub month_count: usize,
    /// None when the dataset is empty
    pub net_total: Option<Amount>,
    pub issues: Vec<AnalysisError>,
}

impl DatasetCheck {
    pub fn is_analyzable(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Render the fixed-layout "Financial Analysis" text block.
/// Every line, including the last rule, ends with a newline.
pub fn render_report(summary: &Summary, formatter: &dyn CurrencyFormatter) -> String {
    let rule = "-".repeat(REPORT_RULE_WIDTH);
    let lines = [
        "    Financial Analysis".to_string(),
        rule.clone(),
        format!("    Total Months: {}", summary.total_months),
        format!("    Total: {}", formatter.format(summary.total)),
        format!(
            "    Average Change: {}",
            formatter.format(summary.average_change)
        ),
        format!(
            "    Greatest Increase in Profits: {} ({})",
            summary.greatest_increase.period,
            formatter.format(summary.greatest_increase.amount)
        ),
        format!(
            "    Greatest Decrease in Profits: {} ({})",
            summary.greatest_decrease.period,
            formatter.format(summary.greatest_decrease.amount)
        ),
        rule,
    ];

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
