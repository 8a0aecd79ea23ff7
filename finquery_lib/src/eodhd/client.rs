//! EODHD client for end-of-day historical prices. Every call is a GET with
//! the key in `api_token` and `fmt=json`.

use chrono::NaiveDate;
use finquery_api::{Client, Endpoint, Error, Method, Params};
use serde_json::Value;

use super::types::{validate_bars, EodBar, Order, Period};

const BASE_URL: &str = "https://eodhd.com/api";

/// Client for the EODHD end-of-day data API.
pub struct EodhdClient {
    inner: Client,
}

impl EodhdClient {
    /// Creates a client for the production API. EODHD mandates a key.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::with_base_url(BASE_URL, api_key)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, Error> {
        let endpoint = Endpoint::new(base_url).with_query_auth("api_token", api_key);
        Ok(Self {
            inner: Client::new(endpoint)?,
        })
    }

    /// End-of-day history for a symbol as raw JSON, oldest or newest first
    /// per `order`. `symbol` carries the exchange suffix, e.g. `AAPL.MX`.
    pub async fn eod_history_raw(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
        period: Period,
        order: Order,
    ) -> Result<Value, Error> {
        let params = Params::new()
            .set("from", from.format("%Y-%m-%d").to_string())
            .set("to", to.format("%Y-%m-%d").to_string())
            .set("period", period.to_string())
            .set("order", order.to_string())
            .set("fmt", "json");
        self.inner
            .call(&format!("eod/{symbol}"), &params, Method::Get)
            .await
    }

    /// End-of-day history validated into typed bars. Fails on the first row
    /// that does not satisfy the record schema.
    pub async fn eod_history(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
        period: Period,
        order: Order,
    ) -> Result<Vec<EodBar>, Error> {
        let raw = self.eod_history_raw(symbol, from, to, period, order).await?;
        validate_bars(&raw)
    }
}
