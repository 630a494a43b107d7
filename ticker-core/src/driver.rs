use std::sync::Arc;

use async_trait::async_trait;

use crate::{DriverKey, QuoteBatch, QuoteError, StockQuote};

/// A live, reusable connection to one driver.
///
/// Handles carry no per-call mutable state: each `retrieve` builds its own
/// request and result, so one handle may serve many concurrent calls.
#[async_trait]
pub trait Handle: Send + Sync {
    /// Name of the driver that opened this handle.
    fn driver(&self) -> &'static str;

    /// Name the handle was opened with.
    ///
    /// Drivers may keep it for diagnostics; it does not select configuration.
    fn source(&self) -> &str;

    /// Fetch quotes for `tickers` in one batched request and report which
    /// items were dropped during normalization.
    ///
    /// # Errors
    /// Returns `QuoteError::Transport` when the request cannot be made and
    /// `QuoteError::Decode` when the response does not have the expected shape.
    /// Either way no quotes are returned.
    async fn retrieve_batch(&self, tickers: &[String]) -> Result<QuoteBatch, QuoteError>;

    /// Fetch quotes for `tickers`, keeping only the normalized quotes.
    ///
    /// The result may be shorter than `tickers`: unknown symbols and items
    /// with unparseable prices are left out.
    ///
    /// # Errors
    /// Same as [`Handle::retrieve_batch`].
    async fn retrieve(&self, tickers: &[String]) -> Result<Vec<StockQuote>, QuoteError> {
        self.retrieve_batch(tickers)
            .await
            .map(QuoteBatch::into_quotes)
    }
}

/// Stateless factory registered under a fixed name; produces [`Handle`]s.
pub trait Driver: Send + Sync {
    /// A stable identifier used as the registry key (e.g. "yahoo").
    fn name(&self) -> &'static str;

    /// Canonical driver key constructed from the static name.
    fn key(&self) -> DriverKey {
        DriverKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Open a handle.
    ///
    /// # Errors
    /// Drivers that need per-handle setup may fail here; drivers without such
    /// setup always succeed.
    fn open(&self, name: &str) -> Result<Arc<dyn Handle>, QuoteError>;
}
