//! CLI subcommand implementations.

pub mod alpha_vantage;
pub mod eodhd;
pub mod open_figi;
