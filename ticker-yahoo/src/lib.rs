//! ticker-yahoo
//!
//! Quote driver for the Yahoo YQL `yahoo.finance.quotes` table. Implements the
//! `ticker_core::Driver` factory and the `Handle` it opens.
//!
//! One `retrieve` call is one GET: the tickers become a single YQL
//! `select ... where symbol in (...)` statement, the JSON envelope is decoded
//! according to its `count`, and each item's string price is parsed into an
//! `f64`. Transport and decode failures abort the call; an item with an
//! unusable price is dropped and reported in the batch's `skipped` list.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ticker::Registry;
//! use ticker_yahoo::YahooDriver;
//!
//! let registry = Registry::builder()
//!     .with_driver(YahooDriver::NAME, Arc::new(YahooDriver::new_default()))
//!     .build()?;
//! let quotes = registry.retrieve("yahoo", &["AAPL".into(), "MSFT".into()]).await?;
//! ```
#![warn(missing_docs)]

/// Transport abstraction and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;
pub mod normalize;
pub mod query;
pub mod wire;

use std::sync::Arc;

use adapter::{RealAdapter, YahooTransport};
use async_trait::async_trait;
use ticker_core::{Driver, DriverKey, Handle, QuoteBatch, QuoteError};
use url::Url;

pub use builder::YahooDriverBuilder;

/// Driver factory. Cheap to clone handles out of: every handle shares the
/// driver's transport.
pub struct YahooDriver {
    transport: Arc<dyn YahooTransport>,
    endpoint: Url,
    env: String,
}

impl YahooDriver {
    /// Registry name.
    pub const NAME: &'static str = "yahoo";

    /// Static driver key for registry configuration.
    pub const KEY: DriverKey = DriverKey::new(Self::NAME);

    /// Build against the public endpoint with a fresh `reqwest::Client`.
    #[must_use]
    pub fn new_default() -> Self {
        Self::with_transport(Arc::new(RealAdapter::new_default()))
    }

    /// Build against the public endpoint with an injected transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn YahooTransport>) -> Self {
        Self {
            transport,
            endpoint: default_endpoint(),
            env: query::DEFAULT_ENV.to_string(),
        }
    }

    /// Endpoint requests are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Datatable store URI sent as `env`.
    #[must_use]
    pub fn env(&self) -> &str {
        &self.env
    }
}

impl Default for YahooDriver {
    fn default() -> Self {
        Self::new_default()
    }
}

fn default_endpoint() -> Url {
    Url::parse(query::DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

impl Driver for YahooDriver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo"
    }

    fn open(&self, name: &str) -> Result<Arc<dyn Handle>, QuoteError> {
        Ok(Arc::new(YahooHandle {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint.clone(),
            env: self.env.clone(),
            source: name.to_string(),
        }))
    }
}

/// Handle opened by [`YahooDriver`]; holds no per-call state.
pub struct YahooHandle {
    transport: Arc<dyn YahooTransport>,
    endpoint: Url,
    env: String,
    source: String,
}

impl YahooHandle {
    /// URL a `retrieve` for `tickers` would request.
    #[must_use]
    pub fn request_url(&self, tickers: &[String]) -> Url {
        query::request_url(&self.endpoint, &self.env, tickers)
    }
}

#[async_trait]
impl Handle for YahooHandle {
    fn driver(&self) -> &'static str {
        YahooDriver::NAME
    }

    fn source(&self) -> &str {
        &self.source
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ticker_yahoo::retrieve_batch",
            skip(self, tickers),
            fields(count = tickers.len()),
        )
    )]
    async fn retrieve_batch(&self, tickers: &[String]) -> Result<QuoteBatch, QuoteError> {
        let url = self.request_url(tickers);
        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "requesting quotes");

        let body = self.transport.get(&url).await?;
        let set = wire::decode(&body)?;

        #[cfg(feature = "tracing")]
        {
            if set.is_empty() {
                tracing::debug!("provider returned no quotes");
            }
        }

        Ok(normalize::normalize(set))
    }
}
