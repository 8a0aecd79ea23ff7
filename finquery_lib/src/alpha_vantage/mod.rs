//! Alpha Vantage API client module for market time series, symbol search,
//! options chains, and news sentiment.

pub mod client;
pub mod types;

pub use client::AlphaVantageClient;
pub use types::Interval;
