//! Configuration types shared by the registry and drivers.

use serde::{Deserialize, Serialize};

/// What a registry does when a second driver is registered under an existing name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DuplicatePolicy {
    /// Keep the first driver and return `QuoteError::DuplicateDriver`.
    #[default]
    Reject,
    /// Replace the earlier driver with the newer one, keeping its position.
    Replace,
}

/// Registry-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Duplicate-name handling for `register`.
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
}
