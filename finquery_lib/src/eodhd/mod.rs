//! EODHD API client module for end-of-day historical prices with
//! schema-validated records.

pub mod client;
pub mod types;

pub use client::EodhdClient;
pub use types::{EodBar, Order, Period};
