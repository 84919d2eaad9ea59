use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::application::AppError;
use crate::domain::{parse_amount, Transaction};

/// Supported dataset encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Header row, then `period,amount` records
    Csv,
    /// Array of `["period", amount]` pairs
    Json,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(InputFormat::Csv),
            "json" => Some(InputFormat::Json),
            _ => None,
        }
    }

    /// Guess the format from a file extension; anything but `.json` is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loader turning an external dataset into an ordered list of transactions.
///
/// Loading is all-or-nothing: the first malformed entry aborts the load and
/// no transactions are returned.
pub struct Importer {
    format: InputFormat,
}

impl Importer {
    pub fn new(format: InputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    /// Load transactions from any reader, preserving input order.
    pub fn load<R: Read>(&self, reader: R) -> Result<Vec<Transaction>, AppError> {
        let transactions = match self.format {
            InputFormat::Csv => load_csv(reader)?,
            InputFormat::Json => load_json(reader)?,
        };

        debug!(
            count = transactions.len(),
            format = %self.format,
            "dataset loaded"
        );
        Ok(transactions)
    }

    /// Open and load a file on disk.
    pub fn load_file(&self, path: &Path) -> Result<Vec<Transaction>, AppError> {
        let file = File::open(path)?;
        self.load(file)
    }
}

fn load_csv<R: Read>(reader: R) -> Result<Vec<Transaction>, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut transactions = Vec::new();

    for (line_num, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(line_num + 2); // +2 for header and 0-indexing
        let location = format!("line {}", line);

        if record.len() != 2 {
            return Err(AppError::malformed(
                location,
                format!("expected 2 fields (period, amount), found {}", record.len()),
            ));
        }

        let period = &record[0];
        let amount = parse_amount(&record[1])
            .map_err(|e| AppError::malformed(&location, format!("{} '{}'", e, &record[1])))?;

        transactions.push(Transaction::new(period, amount));
    }

    Ok(transactions)
}

fn load_json<R: Read>(reader: R) -> Result<Vec<Transaction>, AppError> {
    let document: Value = serde_json::from_reader(reader)?;
    let entries = document.as_array().ok_or_else(|| {
        AppError::malformed("document root", "expected an array of [period, amount] pairs")
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            parse_json_entry(entry)
                .map_err(|reason| AppError::malformed(format!("entry {}", i + 1), reason))
        })
        .collect()
}

fn parse_json_entry(entry: &Value) -> Result<Transaction, String> {
    let pair = match entry.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        Some(other) => {
            return Err(format!(
                "expected 2 fields (period, amount), found {}",
                other.len()
            ));
        }
        None => return Err(format!("expected a [period, amount] pair, found {}", entry)),
    };

    let period = pair[0]
        .as_str()
        .ok_or_else(|| format!("period must be a string, found {}", pair[0]))?;
    let amount = pair[1]
        .as_f64()
        .ok_or_else(|| format!("amount must be a number, found {}", pair[1]))?;

    Ok(Transaction::new(period, amount))
}
