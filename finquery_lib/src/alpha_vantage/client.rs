//! Alpha Vantage client. Every operation is a GET against the `/query`
//! endpoint with the operation name in the `function` parameter and the key
//! in `apikey`.

use finquery_api::{Client, Endpoint, Error, Method, Params};
use serde_json::Value;

use super::types::Interval;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Client for the Alpha Vantage market data API.
pub struct AlphaVantageClient {
    inner: Client,
}

impl AlphaVantageClient {
    /// Creates a client for the production API. Alpha Vantage mandates a key.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::with_base_url(BASE_URL, api_key)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, Error> {
        let endpoint = Endpoint::new(base_url)
            .with_operation_param("function")
            .with_query_auth("apikey", api_key);
        Ok(Self {
            inner: Client::new(endpoint)?,
        })
    }

    async fn get(&self, function: &str, params: Params) -> Result<Value, Error> {
        self.inner.call(function, &params, Method::Get).await
    }

    /// Intraday bars for a symbol at the given interval.
    pub async fn time_series_intraday(
        &self,
        symbol: &str,
        interval: Interval,
    ) -> Result<Value, Error> {
        let params = Params::new()
            .set("symbol", symbol)
            .set("interval", interval.to_string());
        self.get("TIME_SERIES_INTRADAY", params).await
    }

    /// Daily bars for a symbol.
    pub async fn time_series_daily(&self, symbol: &str) -> Result<Value, Error> {
        self.get("TIME_SERIES_DAILY", Params::new().set("symbol", symbol))
            .await
    }

    /// Current open/closed state of the major trading venues.
    pub async fn market_status(&self) -> Result<Value, Error> {
        self.get("MARKET_STATUS", Params::new()).await
    }

    /// Full-text search over symbols, names, and ISINs.
    pub async fn symbol_search(&self, keywords: &str) -> Result<Value, Error> {
        self.get("SYMBOL_SEARCH", Params::new().set("keywords", keywords))
            .await
    }

    /// Realtime options chain for a symbol. Premium-tier endpoint.
    pub async fn realtime_options(
        &self,
        symbol: &str,
        require_greeks: bool,
    ) -> Result<Value, Error> {
        let params = Params::new()
            .set("symbol", symbol)
            .set("require_greeks", require_greeks);
        self.get("REAL_TIME_OPTIONS", params).await
    }

    /// News and sentiment for the given tickers. The endpoint takes one
    /// comma-joined `tickers` parameter.
    pub async fn news_sentiment(&self, tickers: &[String]) -> Result<Value, Error> {
        self.get(
            "NEWS_SENTIMENT",
            Params::new().set("tickers", tickers.join(",")),
        )
        .await
    }
}
