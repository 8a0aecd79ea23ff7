//! Environment-backed vendor credentials, read once at process start.
//!
//! Loading a `.env` file (if any) is the embedding binary's job; this module
//! only reads the process environment.

use finquery_api::Error;

/// API keys for the supported vendors. Blank values count as unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    alpha_vantage_api_key: Option<String>,
    openfigi_api_key: Option<String>,
    eodhd_api_key: Option<String>,
}

impl Config {
    /// Reads vendor credentials from the process environment.
    pub fn from_env() -> Self {
        Self {
            alpha_vantage_api_key: read("ALPHA_VANTAGE_API_KEY"),
            openfigi_api_key: read("OPENFIGI_API_KEY"),
            eodhd_api_key: read("EODHD_API_KEY"),
        }
    }

    /// Alpha Vantage mandates a key for every request.
    pub fn alpha_vantage_key(&self) -> Result<&str, Error> {
        self.alpha_vantage_api_key
            .as_deref()
            .ok_or_else(|| missing("ALPHA_VANTAGE_API_KEY"))
    }

    /// OpenFIGI works without a key at reduced rate limits.
    pub fn openfigi_key(&self) -> Option<&str> {
        self.openfigi_api_key.as_deref()
    }

    /// EODHD mandates a key for every request.
    pub fn eodhd_key(&self) -> Result<&str, Error> {
        self.eodhd_api_key
            .as_deref()
            .ok_or_else(|| missing("EODHD_API_KEY"))
    }
}

fn read(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn missing(name: &str) -> Error {
    Error::Configuration(format!("{name} is not set"))
}
