use anyhow::Result;

fn main() -> Result<()> {
    portfolio_reindexer::cli::run()
}
