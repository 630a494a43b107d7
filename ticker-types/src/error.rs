use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the ticker workspace.
///
/// Covers the two fatal per-call failure kinds a driver can report (transport
/// and decode) plus registry and configuration errors. A single unparseable
/// price is *not* an error; see [`crate::SkippedQuote`].
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuoteError {
    /// Building the request or performing the HTTP round trip failed.
    #[error("{driver} transport failed: {msg}")]
    Transport {
        /// Driver name that failed.
        driver: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The response body did not match the expected envelope or item shape.
    #[error("{driver} decode failed: {msg}")]
    Decode {
        /// Driver name that failed.
        driver: String,
        /// Human-readable error message.
        msg: String,
    },

    /// No driver is registered under the requested name.
    #[error("unknown driver: {name}")]
    UnknownDriver {
        /// Requested driver name.
        name: String,
    },

    /// The registry refused a second driver under an existing name.
    #[error("driver already registered: {name}")]
    DuplicateDriver {
        /// Conflicting driver name.
        name: String,
    },

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl QuoteError {
    /// Helper: build a `Transport` error tagged with the driver name.
    pub fn transport(driver: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            driver: driver.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Decode` error tagged with the driver name.
    pub fn decode(driver: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Decode {
            driver: driver.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `UnknownDriver` error.
    pub fn unknown_driver(name: impl Into<String>) -> Self {
        Self::UnknownDriver { name: name.into() }
    }

    /// Helper: build a `DuplicateDriver` error.
    pub fn duplicate_driver(name: impl Into<String>) -> Self {
        Self::DuplicateDriver { name: name.into() }
    }

    /// True for transport failures.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// True for envelope or item decode failures.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Driver name attached to the error, when there is one.
    #[must_use]
    pub fn driver(&self) -> Option<&str> {
        match self {
            Self::Transport { driver, .. } | Self::Decode { driver, .. } => Some(driver),
            _ => None,
        }
    }
}
