use clap::Parser;
use temperature_heatmap::cli::{run, Cli};
use temperature_heatmap::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
