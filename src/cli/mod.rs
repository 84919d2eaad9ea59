use std::path::PathBuf;
use std::sync::Once;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::application::LedgerAnalyzer;
use crate::domain::{format_currency, Transaction, UsDollar};
use crate::io::{Exporter, Importer, InputFormat, OutputFormat};

/// ledger-summary - Financial analysis of a monthly profit/loss ledger
#[derive(Parser)]
#[command(name = "ledger-summary")]
#[command(about = "Summarize monthly profit/loss records into a financial analysis report")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read the dataset from
#[derive(Args)]
pub struct InputArgs {
    /// Dataset file (stdin if omitted)
    pub input: Option<PathBuf>,

    /// Input format: csv, json (default: from file extension, csv for stdin)
    #[arg(long)]
    pub input_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the financial analysis report
    Summary {
        #[command(flatten)]
        source: InputArgs,

        /// Output format: text, json, csv
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List transactions in input order
    List {
        #[command(flatten)]
        source: InputArgs,

        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Verify the dataset can be analyzed
    Check {
        #[command(flatten)]
        source: InputArgs,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        match self.command {
            Commands::Summary {
                source,
                format,
                output,
            } => run_summary_command(&source, &format, output.as_deref()),

            Commands::List { source, limit } => run_list_command(&source, limit),

            Commands::Check { source } => run_check_command(&source),
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let default_filter = if verbose {
            "warn,ledger_summary=debug"
        } else {
            "warn"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // Another subscriber may already be installed (e.g. by an embedding test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn load_dataset(source: &InputArgs) -> Result<Vec<Transaction>> {
    use std::io::stdin;

    let format = match source.input_format.as_deref() {
        Some(name) => InputFormat::from_str(name).ok_or_else(|| {
            anyhow::anyhow!("Invalid input format '{}'. Valid formats: csv, json", name)
        })?,
        None => source
            .input
            .as_deref()
            .map(InputFormat::from_path)
            .unwrap_or(InputFormat::Csv),
    };

    let importer = Importer::new(format);
    match &source.input {
        Some(path) => importer
            .load_file(path)
            .with_context(|| format!("Failed to load dataset: {}", path.display())),
        None => importer
            .load(stdin().lock())
            .context("Failed to load dataset from stdin"),
    }
}

fn run_summary_command(source: &InputArgs, format: &str, output: Option<&str>) -> Result<()> {
    use std::fs::File;
    use std::io::{stdout, Write};

    let format = OutputFormat::from_str(format).ok_or_else(|| {
        anyhow::anyhow!("Invalid output format '{}'. Valid formats: text, json, csv", format)
    })?;

    let transactions = load_dataset(source)?;
    let summary = LedgerAnalyzer::new(&transactions)
        .summarize()
        .context("Cannot analyze ledger")?;

    // Only open the output once the summary exists, so failures leave no partial report
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    Exporter::new(&summary).export(format, writer, &UsDollar)?;

    if let Some(path) = output {
        eprintln!("Wrote {} report to {}", format, path);
    }

    Ok(())
}

fn run_list_command(source: &InputArgs, limit: Option<usize>) -> Result<()> {
    let transactions = load_dataset(source)?;

    if transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    println!("{:<12} {:>18}", "MONTH", "PROFIT/LOSS");
    println!("{}", "-".repeat(31));

    let shown = limit.unwrap_or(transactions.len());
    for transaction in transactions.iter().take(shown) {
        println!(
            "{:<12} {:>18}",
            truncate(transaction.period(), 12),
            format_currency(transaction.amount())
        );
    }

    if shown < transactions.len() {
        println!("... and {} more", transactions.len() - shown);
    }

    Ok(())
}

fn run_check_command(source: &InputArgs) -> Result<()> {
    let transactions = load_dataset(source)?;

    println!("Checking dataset...\n");

    let check = LedgerAnalyzer::new(&transactions).check();

    println!("Transactions: {}", check.transaction_count);
    println!("Months:       {}", check.month_count);
    println!(
        "Net total:    {}",
        check
            .net_total
            .map(format_currency)
            .unwrap_or_else(|| "n/a".to_string())
    );
    println!();

    if check.is_analyzable() {
        println!("Dataset is ready for analysis.");
    } else {
        println!("Issues found:");
        for issue in &check.issues {
            println!("  - {}", issue);
        }
        anyhow::bail!("Dataset check failed");
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
