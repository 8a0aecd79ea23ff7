//! Vendor integrations for the generic query client: Alpha Vantage,
//! OpenFIGI, and EODHD.
//!
//! Each module is a thin wrapper that names the remote operation, shapes its
//! parameters, and hands the call to the shared `finquery_api` client. The
//! wrappers add no retries, caching, or rate limiting.

pub mod alpha_vantage;
pub mod config;
pub mod eodhd;
pub mod open_figi;

pub use finquery_api;
pub use finquery_api::{Error, Params};

pub use alpha_vantage::AlphaVantageClient;
pub use config::Config;
pub use eodhd::EodhdClient;
pub use open_figi::OpenFigiClient;
