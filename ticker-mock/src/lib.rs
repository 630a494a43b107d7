use std::sync::Arc;

use async_trait::async_trait;
use ticker_core::{
    Driver, Handle, QuoteBatch, QuoteError, SkipReason, SkippedQuote, StockQuote,
};

mod fixtures;

/// Mock driver for CI-safe examples. Provides deterministic prices from static fixtures.
///
/// - Known symbols return their fixture price.
/// - `"NA"` is listed without a usable price and ends up in `skipped`.
/// - Unknown symbols are omitted, as the real provider omits them.
/// - Any `"FAIL"` ticker fails the whole call with a transport error.
pub struct MockDriver {
    name: &'static str,
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDriver {
    /// Registry name used by [`MockDriver::new`].
    pub const NAME: &'static str = "mock";

    #[must_use]
    pub const fn new() -> Self {
        Self { name: Self::NAME }
    }

    /// Mock registered under a different name; useful when a test needs two drivers.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Driver for MockDriver {
    fn name(&self) -> &'static str {
        self.name
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn open(&self, name: &str) -> Result<Arc<dyn Handle>, QuoteError> {
        Ok(Arc::new(MockHandle {
            driver: self.name,
            source: name.to_string(),
        }))
    }
}

struct MockHandle {
    driver: &'static str,
    source: String,
}

#[async_trait]
impl Handle for MockHandle {
    fn driver(&self) -> &'static str {
        self.driver
    }

    fn source(&self) -> &str {
        &self.source
    }

    async fn retrieve_batch(&self, tickers: &[String]) -> Result<QuoteBatch, QuoteError> {
        if tickers.iter().any(|t| t == "FAIL") {
            return Err(QuoteError::transport(self.driver, "forced failure"));
        }

        let mut batch = QuoteBatch::default();
        for t in tickers {
            let Some(raw) = fixtures::raw_price(t) else {
                continue;
            };
            match raw.parse::<f64>() {
                Ok(p) => batch.quotes.push(StockQuote::new(t.clone(), p)),
                Err(e) => batch.skipped.push(SkippedQuote {
                    symbol: t.clone(),
                    raw_price: Some(raw.to_string()),
                    reason: SkipReason::InvalidPrice {
                        detail: e.to_string(),
                    },
                }),
            }
        }
        Ok(batch)
    }
}
