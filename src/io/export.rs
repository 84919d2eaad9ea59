use std::io::Write;

use crate::application::{render_report, AppError, Summary};
use crate::domain::CurrencyFormatter;

/// Output encodings for a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-layout "Financial Analysis" report
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exporter for writing a summary to various formats
pub struct Exporter<'a> {
    summary: &'a Summary,
}

impl<'a> Exporter<'a> {
    pub fn new(summary: &'a Summary) -> Self {
        Self { summary }
    }

    pub fn export<W: Write>(
        &self,
        format: OutputFormat,
        writer: W,
        formatter: &dyn CurrencyFormatter,
    ) -> Result<(), AppError> {
        match format {
            OutputFormat::Text => self.export_text(writer, formatter),
            OutputFormat::Json => self.export_json(writer),
            OutputFormat::Csv => self.export_csv(writer),
        }
    }

    /// Write the text report, amounts rendered by `formatter`
    pub fn export_text<W: Write>(
        &self,
        mut writer: W,
        formatter: &dyn CurrencyFormatter,
    ) -> Result<(), AppError> {
        writer.write_all(render_report(self.summary, formatter).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the summary as pretty-printed JSON
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self.summary)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Write one `metric,period,amount` row per figure, with raw numbers
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<(), AppError> {
        let summary = self.summary;
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(["metric", "period", "amount"])?;

        csv_writer.write_record([
            "total_transactions",
            "",
            summary.total_transactions.to_string().as_str(),
        ])?;
        csv_writer.write_record([
            "total_months",
            "",
            summary.total_months.to_string().as_str(),
        ])?;
        csv_writer.write_record(["total", "", summary.total.to_string().as_str()])?;
        csv_writer.write_record([
            "average_change",
            "",
            summary.average_change.to_string().as_str(),
        ])?;
        csv_writer.write_record([
            "greatest_increase",
            summary.greatest_increase.period.as_str(),
            summary.greatest_increase.amount.to_string().as_str(),
        ])?;
        csv_writer.write_record([
            "greatest_decrease",
            summary.greatest_decrease.period.as_str(),
            summary.greatest_decrease.amount.to_string().as_str(),
        ])?;

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("Json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("csv"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_str("yaml"), None);
    }
}
