use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::reindexer::reindex_file;

/// File processed when no path argument is given
pub const DEFAULT_PORTFOLIO_PATH: &str = "atit.json";

#[derive(Parser)]
#[command(name = "portfolio-reindexer")]
#[command(version = "0.1.0")]
#[command(about = "Stamp sequential ids onto portfolio entries in a JSON file", long_about = None)]
pub struct Cli {
    /// Portfolio JSON file to reindex in place
    #[arg(default_value = DEFAULT_PORTFOLIO_PATH)]
    pub file: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let serialized = reindex_file(&cli.file)?;
    println!("{}", serialized);

    Ok(())
}
