//! Ticker is a small framework for pluggable stock quote drivers.
//!
//! Overview
//! - A [`Registry`] maps names to drivers implementing `ticker_core::Driver`.
//! - A driver opens `Handle`s; a handle answers `retrieve(tickers)` with one
//!   batched request per call.
//! - Drivers are registered explicitly at startup. Duplicate names are
//!   rejected by default, or replaced when configured with
//!   `DuplicatePolicy::Replace`.
//!
//! Behavior of a retrieve call
//! - Transport and decode failures are fatal for the whole call and return no
//!   quotes.
//! - An item whose price cannot be parsed is dropped; `Handle::retrieve_batch`
//!   reports it in `QuoteBatch::skipped`.
//! - No caching, retries or rate limiting: callers own those policies.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use ticker::Registry;
//! use ticker_yahoo::YahooDriver;
//!
//! let registry = Registry::builder()
//!     .with_driver(YahooDriver::NAME, Arc::new(YahooDriver::new_default()))
//!     .build()?;
//!
//! let handle = registry.open("yahoo", "default")?;
//! let quotes = handle.retrieve(&["AAPL".into(), "MSFT".into()]).await?;
//! for q in quotes {
//!     println!("{} {}", q.symbol, q.last_trade_price);
//! }
//! ```
//!
//! See `ticker/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Registry, RegistryBuilder};

// Re-export core types for convenience
pub use ticker_core::{
    Driver, DriverKey, DuplicatePolicy, Handle, QuoteBatch, QuoteError, RegistryConfig,
    SkipReason, SkippedQuote, StockQuote,
};
