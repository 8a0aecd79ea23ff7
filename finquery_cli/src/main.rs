mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use finquery_lib::Config;

#[derive(Parser)]
#[command(name = "finquery")]
#[command(about = "Query market data from Alpha Vantage, OpenFIGI, and EODHD")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Alpha Vantage time series, search, options, and news
    #[command(subcommand)]
    AlphaVantage(commands::alpha_vantage::AlphaVantageCommand),
    /// OpenFIGI symbology search and identifier mapping
    #[command(subcommand)]
    OpenFigi(commands::open_figi::OpenFigiCommand),
    /// EODHD end-of-day price history
    Eodhd(commands::eodhd::EodhdArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("finquery_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match &cli.command {
        Commands::AlphaVantage(cmd) => commands::alpha_vantage::run(cmd, &config).await?,
        Commands::OpenFigi(cmd) => commands::open_figi::run(cmd, &config).await?,
        Commands::Eodhd(args) => commands::eodhd::run(args, &config).await?,
    }

    Ok(())
}
