mod common;

use anyhow::Result;
use common::{assert_close, budget_2010, ledger};
use ledger_summary::application::{render_report, LedgerAnalyzer, Summary};
use ledger_summary::domain::UsDollar;
use ledger_summary::io::{Exporter, OutputFormat};

fn budget_summary() -> Result<Summary> {
    Ok(LedgerAnalyzer::new(&budget_2010()).summarize()?)
}

#[test]
fn test_text_report_for_full_year() -> Result<()> {
    let report = render_report(&budget_summary()?, &UsDollar);
    let rule = "-".repeat(72);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(
        lines,
        vec![
            "    Financial Analysis",
            rule.as_str(),
            "    Total Months: 12",
            "    Total: $5,651,079.00",
            "    Average Change: -$86,203.36",
            "    Greatest Increase in Profits: Oct-2010 ($693,918.00)",
            "    Greatest Decrease in Profits: Sep-2010 (-$216,386.00)",
            rule.as_str(),
        ]
    );
    assert!(report.ends_with('\n'));

    Ok(())
}

#[test]
fn test_export_text_matches_render() -> Result<()> {
    let summary = budget_summary()?;
    let mut buffer = Vec::new();

    Exporter::new(&summary).export(OutputFormat::Text, &mut buffer, &UsDollar)?;

    assert_eq!(String::from_utf8(buffer)?, render_report(&summary, &UsDollar));
    Ok(())
}

#[test]
fn test_export_json_summary() -> Result<()> {
    let summary = budget_summary()?;
    let mut buffer = Vec::new();

    Exporter::new(&summary).export(OutputFormat::Json, &mut buffer, &UsDollar)?;

    let value: serde_json::Value = serde_json::from_slice(&buffer)?;
    assert_eq!(value["totalTransactions"], 12);
    assert_eq!(value["totalMonths"], 12);
    assert_eq!(value["total"], 5651079.0);
    assert_eq!(value["greatestIncrease"]["period"], "Oct-2010");
    assert_eq!(value["greatestIncrease"]["amount"], 693918.0);
    assert_eq!(value["greatestDecrease"]["period"], "Sep-2010");

    let average = value["averageChange"].as_f64().unwrap_or(f64::NAN);
    assert_close(average, summary.average_change);
    assert!(value.get("total_months").is_none());

    let parsed: Summary = serde_json::from_slice(&buffer)?;
    assert_eq!(parsed.greatest_decrease, summary.greatest_decrease);

    Ok(())
}

#[test]
fn test_export_csv_rows() -> Result<()> {
    let transactions = ledger(&[("Jan-2022", 200.0), ("Feb-2022", 400.0), ("Mar-2022", 500.0)]);
    let summary = LedgerAnalyzer::new(&transactions).summarize()?;
    let mut buffer = Vec::new();

    Exporter::new(&summary).export(OutputFormat::Csv, &mut buffer, &UsDollar)?;

    let csv = String::from_utf8(buffer)?;
    assert_eq!(
        csv,
        "metric,period,amount\n\
         total_transactions,,3\n\
         total_months,,3\n\
         total,,1100\n\
         average_change,,150\n\
         greatest_increase,Feb-2022,200\n\
         greatest_decrease,Jan-2022,200\n"
    );

    Ok(())
}
