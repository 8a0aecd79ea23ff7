use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use finquery_lib::eodhd::{EodhdClient, Order, Period};
use finquery_lib::Config;

use crate::output;

#[derive(Args)]
pub struct EodhdArgs {
    /// Symbol with exchange suffix, e.g. AAPL.MX or VWRP.LON
    pub symbol: String,

    /// Range start, YYYY-MM-DD
    #[arg(long)]
    pub from: NaiveDate,

    /// Range end, YYYY-MM-DD
    #[arg(long)]
    pub to: NaiveDate,

    /// Bar period: d, w, m
    #[arg(long, default_value = "d")]
    pub period: Period,

    /// Sort order: a (oldest first) or d (newest first)
    #[arg(long, default_value = "a")]
    pub order: Order,

    /// Print the raw response instead of validated bars
    #[arg(long)]
    pub raw: bool,
}

pub async fn run(args: &EodhdArgs, config: &Config) -> Result<()> {
    let client = EodhdClient::new(config.eodhd_key()?.to_string())?;

    if args.raw {
        let data = client
            .eod_history_raw(&args.symbol, args.from, args.to, args.period, args.order)
            .await?;
        return output::print_json(&data);
    }

    let bars = client
        .eod_history(&args.symbol, args.from, args.to, args.period, args.order)
        .await?;
    output::print_json(&serde_json::to_value(&bars)?)
}
