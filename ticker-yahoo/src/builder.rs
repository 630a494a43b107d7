use std::sync::Arc;
use std::time::Duration;

use ticker_core::QuoteError;
use url::Url;

use crate::YahooDriver;
use crate::adapter::{RealAdapter, YahooTransport};
use crate::query;

/// Builder for a [`YahooDriver`] with a non-default endpoint or transport.
///
/// Transport precedence: an injected [`YahooTransport`] wins over an injected
/// `reqwest::Client`, which wins over a client built from `timeout` and
/// `user_agent`.
#[derive(Default)]
pub struct YahooDriverBuilder {
    endpoint: Option<String>,
    env: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    client: Option<reqwest::Client>,
    transport: Option<Arc<dyn YahooTransport>>,
}

impl YahooDriverBuilder {
    /// Base URL to send queries to (defaults to the public YQL endpoint).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Datatable store URI passed as `env`.
    #[must_use]
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Whole-request timeout applied by the HTTP client.
    ///
    /// Ignored when a client or transport is injected.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `User-Agent` header sent by the HTTP client.
    ///
    /// Ignored when a client or transport is injected.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use an existing `reqwest::Client`.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Use a custom transport.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn YahooTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the driver.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the endpoint is not a valid URL or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<YahooDriver, QuoteError> {
        let endpoint = self.endpoint.as_deref().unwrap_or(query::DEFAULT_ENDPOINT);
        let endpoint = Url::parse(endpoint)
            .map_err(|e| QuoteError::InvalidArg(format!("endpoint {endpoint:?}: {e}")))?;

        let transport: Arc<dyn YahooTransport> = match (self.transport, self.client) {
            (Some(t), _) => t,
            (None, Some(client)) => Arc::new(RealAdapter::new(client)),
            (None, None) => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(ua) = self.user_agent {
                    builder = builder.user_agent(ua);
                }
                let client = builder
                    .build()
                    .map_err(|e| QuoteError::InvalidArg(format!("http client: {e}")))?;
                Arc::new(RealAdapter::new(client))
            }
        };

        Ok(YahooDriver {
            transport,
            endpoint,
            env: self.env.unwrap_or_else(|| query::DEFAULT_ENV.to_string()),
        })
    }
}

impl YahooDriver {
    /// Returns an unconfigured builder.
    ///
    /// Customize with the builder methods before calling `.build()`.
    #[must_use]
    pub fn builder() -> YahooDriverBuilder {
        YahooDriverBuilder::default()
    }
}
