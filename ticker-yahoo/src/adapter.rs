#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use ticker_core::QuoteError;
use url::Url;

use crate::YahooDriver;

/// HTTP transport abstraction (so we can inject canned responses in tests).
#[async_trait]
pub trait YahooTransport: Send + Sync {
    /// Issue one GET and return the full response body.
    async fn get(&self, url: &Url) -> Result<Vec<u8>, QuoteError>;
}

/// Production adapter backed by a shared `reqwest::Client`.
#[derive(Clone, Debug, Default)]
pub struct RealAdapter {
    client: reqwest::Client,
}

impl RealAdapter {
    /// Wrap an existing client.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build with a default `reqwest::Client`.
    #[must_use]
    pub fn new_default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

fn map_reqwest_err(e: &reqwest::Error, context: &str) -> QuoteError {
    if let Some(status) = e.status() {
        QuoteError::transport(YahooDriver::NAME, format!("status {status}: {context}"))
    } else if e.is_timeout() {
        QuoteError::transport(YahooDriver::NAME, format!("timed out: {context}"))
    } else {
        QuoteError::transport(YahooDriver::NAME, format!("{context}: {e}"))
    }
}

#[async_trait]
impl YahooTransport for RealAdapter {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, QuoteError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| map_reqwest_err(&e, "request"))?
            .error_for_status()
            .map_err(|e| map_reqwest_err(&e, "response"))?;
        let body = resp
            .bytes()
            .await
            .map_err(|e| map_reqwest_err(&e, "response body"))?;
        Ok(body.to_vec())
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YahooTransport {
    /// Build a `YahooTransport` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YahooTransport>
    where
        F: Send + Sync + 'static + Fn(Url) -> Result<Vec<u8>, QuoteError>,
    {
        struct FnTransport<F>(F);
        #[async_trait]
        impl<F> YahooTransport for FnTransport<F>
        where
            F: Send + Sync + 'static + Fn(Url) -> Result<Vec<u8>, QuoteError>,
        {
            async fn get(&self, url: &Url) -> Result<Vec<u8>, QuoteError> {
                (self.0)(url.clone())
            }
        }
        Arc::new(FnTransport(f))
    }
}
