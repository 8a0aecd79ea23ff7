//! OpenFIGI API client module for symbology search and identifier mapping.

pub mod client;
pub mod types;

pub use client::OpenFigiClient;
pub use types::MappingJob;
