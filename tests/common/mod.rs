// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use ledger_summary::domain::{Amount, Transaction};
use tempfile::TempDir;

/// First year of a monthly profit/loss ledger, as CSV with its header row
pub const BUDGET_2010_CSV: &str = "\
Date,Profit/Losses
Jan-2010,867884
Feb-2010,984655
Mar-2010,322013
Apr-2010,-69417
May-2010,310503
Jun-2010,522857
Jul-2010,1033096
Aug-2010,604885
Sep-2010,-216386
Oct-2010,477532
Nov-2010,893810
Dec-2010,-80353
";

/// The same ledger as a JSON array of [period, amount] pairs
pub const BUDGET_2010_JSON: &str = r#"[
  ["Jan-2010", 867884],
  ["Feb-2010", 984655],
  ["Mar-2010", 322013],
  ["Apr-2010", -69417],
  ["May-2010", 310503],
  ["Jun-2010", 522857],
  ["Jul-2010", 1033096],
  ["Aug-2010", 604885],
  ["Sep-2010", -216386],
  ["Oct-2010", 477532],
  ["Nov-2010", 893810],
  ["Dec-2010", -80353]
]"#;

/// Helper to build a dataset from (period, amount) pairs
pub fn ledger(entries: &[(&str, Amount)]) -> Vec<Transaction> {
    entries
        .iter()
        .map(|&(period, amount)| Transaction::new(period, amount))
        .collect()
}

/// Dataset mirroring BUDGET_2010_CSV
pub fn budget_2010() -> Vec<Transaction> {
    ledger(&[
        ("Jan-2010", 867884.0),
        ("Feb-2010", 984655.0),
        ("Mar-2010", 322013.0),
        ("Apr-2010", -69417.0),
        ("May-2010", 310503.0),
        ("Jun-2010", 522857.0),
        ("Jul-2010", 1033096.0),
        ("Aug-2010", 604885.0),
        ("Sep-2010", -216386.0),
        ("Oct-2010", 477532.0),
        ("Nov-2010", 893810.0),
        ("Dec-2010", -80353.0),
    ])
}

/// Helper to write a dataset file into a fresh temporary directory
pub fn write_dataset(file_name: &str, contents: &str) -> Result<(PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(file_name);
    std::fs::write(&path, contents)?;
    Ok((path, temp_dir))
}

/// Relative float comparison with a small absolute floor
pub fn assert_close(actual: Amount, expected: Amount) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
