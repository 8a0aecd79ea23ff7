use anyhow::Result;
use clap::Subcommand;
use finquery_lib::alpha_vantage::{AlphaVantageClient, Interval};
use finquery_lib::Config;

use crate::output;

#[derive(Subcommand)]
pub enum AlphaVantageCommand {
    /// Intraday bars for a symbol
    Intraday {
        symbol: String,
        /// Bar interval: 1min, 5min, 15min, 30min, 60min
        #[arg(long, default_value = "5min")]
        interval: Interval,
    },
    /// Daily bars for a symbol
    Daily { symbol: String },
    /// Open/closed status of the major trading venues
    MarketStatus,
    /// Search symbols by keyword or ISIN
    Search { keywords: String },
    /// Realtime options chain (premium tier)
    Options {
        symbol: String,
        /// Include greeks and implied volatility
        #[arg(long)]
        require_greeks: bool,
    },
    /// News and sentiment for one or more tickers
    News {
        #[arg(required = true)]
        tickers: Vec<String>,
    },
}

pub async fn run(command: &AlphaVantageCommand, config: &Config) -> Result<()> {
    let client = AlphaVantageClient::new(config.alpha_vantage_key()?.to_string())?;

    let data = match command {
        AlphaVantageCommand::Intraday { symbol, interval } => {
            client.time_series_intraday(symbol, *interval).await?
        }
        AlphaVantageCommand::Daily { symbol } => client.time_series_daily(symbol).await?,
        AlphaVantageCommand::MarketStatus => client.market_status().await?,
        AlphaVantageCommand::Search { keywords } => client.symbol_search(keywords).await?,
        AlphaVantageCommand::Options {
            symbol,
            require_greeks,
        } => client.realtime_options(symbol, *require_greeks).await?,
        AlphaVantageCommand::News { tickers } => client.news_sentiment(tickers).await?,
    };

    output::print_json(&data)
}
