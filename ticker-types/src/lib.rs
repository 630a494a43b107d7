//! Ticker-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod driver;
mod error;
mod quote;

pub use config::{DuplicatePolicy, RegistryConfig};
pub use driver::DriverKey;
pub use error::QuoteError;
pub use quote::{QuoteBatch, SkipReason, SkippedQuote, StockQuote};
