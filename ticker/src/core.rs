use std::collections::HashMap;
use std::sync::Arc;

use ticker_core::{
    Driver, DriverKey, DuplicatePolicy, Handle, QuoteError, RegistryConfig, StockQuote,
};

/// Named collection of quote drivers.
///
/// Drivers are added explicitly during startup composition; nothing registers
/// itself. Handles opened through the registry are independent of it and may
/// outlive it.
pub struct Registry {
    drivers: Vec<(String, Arc<dyn Driver>)>,
    index: HashMap<String, usize>,
    cfg: RegistryConfig,
}

/// Builder for constructing a `Registry` with custom configuration.
pub struct RegistryBuilder {
    drivers: Vec<(String, Arc<dyn Driver>)>,
    cfg: RegistryConfig,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create a new builder with default configuration (duplicates rejected).
    #[must_use]
    pub fn new() -> Self {
        Self {
            drivers: vec![],
            cfg: RegistryConfig::default(),
        }
    }

    /// Register a driver under `name`.
    ///
    /// Duplicate names are resolved in [`RegistryBuilder::build`] according to
    /// the configured [`DuplicatePolicy`].
    #[must_use]
    pub fn with_driver(mut self, name: impl Into<String>, driver: Arc<dyn Driver>) -> Self {
        self.drivers.push((name.into(), driver));
        self
    }

    /// Register a driver under its own [`Driver::name`].
    #[must_use]
    pub fn with_named_driver(self, driver: Arc<dyn Driver>) -> Self {
        let name = driver.name();
        self.with_driver(name, driver)
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: RegistryConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the duplicate-name policy.
    #[must_use]
    pub const fn on_duplicate(mut self, policy: DuplicatePolicy) -> Self {
        self.cfg.on_duplicate = policy;
        self
    }

    /// Build the registry.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no drivers were added, or `DuplicateDriver` when
    /// a name repeats under [`DuplicatePolicy::Reject`].
    pub fn build(self) -> Result<Registry, QuoteError> {
        if self.drivers.is_empty() {
            return Err(QuoteError::InvalidArg(
                "no drivers registered; add at least one via with_driver(...)".to_string(),
            ));
        }

        let mut registry = Registry::with_config(self.cfg);
        for (name, driver) in self.drivers {
            registry.register(name, driver)?;
        }
        Ok(registry)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Empty registry with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Empty registry with the given configuration.
    #[must_use]
    pub fn with_config(cfg: RegistryConfig) -> Self {
        Self {
            drivers: Vec::new(),
            index: HashMap::new(),
            cfg,
        }
    }

    /// Start building a new `Registry`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use ticker::Registry;
    /// use ticker_yahoo::YahooDriver;
    ///
    /// let registry = Registry::builder()
    ///     .with_driver(YahooDriver::NAME, Arc::new(YahooDriver::new_default()))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Add `driver` under `name`.
    ///
    /// Under [`DuplicatePolicy::Replace`] a repeated name swaps in the new
    /// driver at the old position.
    ///
    /// # Errors
    /// Returns `DuplicateDriver` when `name` is taken and the policy is
    /// [`DuplicatePolicy::Reject`], and `InvalidArg` for an empty name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        driver: Arc<dyn Driver>,
    ) -> Result<(), QuoteError> {
        let name = name.into();
        if name.is_empty() {
            return Err(QuoteError::InvalidArg(
                "driver name must not be empty".to_string(),
            ));
        }

        if let Some(&pos) = self.index.get(&name) {
            return match self.cfg.on_duplicate {
                DuplicatePolicy::Replace => {
                    #[cfg(feature = "tracing")]
                    tracing::info!(target: "ticker::registry", driver = %name, "replacing registered driver");
                    self.drivers[pos].1 = driver;
                    Ok(())
                }
                _ => Err(QuoteError::duplicate_driver(name)),
            };
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "ticker::registry", driver = %name, vendor = driver.vendor(), "registered driver");
        self.index.insert(name.clone(), self.drivers.len());
        self.drivers.push((name, driver));
        Ok(())
    }

    /// Driver registered under `name`.
    #[must_use]
    pub fn driver(&self, name: &str) -> Option<Arc<dyn Driver>> {
        self.index
            .get(name)
            .map(|&pos| Arc::clone(&self.drivers[pos].1))
    }

    /// Driver registered under a typed key.
    #[must_use]
    pub fn driver_by_key(&self, key: DriverKey) -> Option<Arc<dyn Driver>> {
        self.driver(key.as_str())
    }

    /// True when `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.drivers.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of registered drivers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// True when no driver is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.cfg
    }

    /// Open a handle on the driver registered as `driver`, passing `source`
    /// through to [`Driver::open`].
    ///
    /// # Errors
    /// Returns `UnknownDriver` when nothing is registered under `driver`, or
    /// whatever the driver's `open` returns.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ticker::registry::open", skip(self))
    )]
    pub fn open(&self, driver: &str, source: &str) -> Result<Arc<dyn Handle>, QuoteError> {
        let d = self
            .driver(driver)
            .ok_or_else(|| QuoteError::unknown_driver(driver))?;
        d.open(source)
    }

    /// Open a handle on `driver` (named after the driver) and fetch quotes for
    /// `tickers` in one call.
    ///
    /// # Errors
    /// Returns `UnknownDriver`, or the transport/decode error of the call.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ticker::registry::retrieve",
            skip(self, tickers),
            fields(count = tickers.len()),
        )
    )]
    pub async fn retrieve(
        &self,
        driver: &str,
        tickers: &[String],
    ) -> Result<Vec<StockQuote>, QuoteError> {
        let handle = self.open(driver, driver)?;
        handle.retrieve(tickers).await
    }
}
