use anyhow::Result;
use clap::Parser;
use ledger_summary::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
