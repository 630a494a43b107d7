//! ticker-core
//!
//! The driver plugin contract shared across the ticker ecosystem.
//!
//! - `driver`: the `Driver` factory trait and the `Handle` it opens.
//! - `types`: re-exports of the shared DTOs from `ticker-types`.
//!
//! Async runtime (Tokio)
//! ---------------------
//! `Handle::retrieve` is an async trait method. Drivers in this workspace
//! perform their I/O with Tokio-based clients, so callers should run under a
//! Tokio 1.x runtime.
#![warn(missing_docs)]

/// Driver factory and handle traits.
pub mod driver;
pub mod types;

pub use driver::{Driver, Handle};
pub use types::*;
