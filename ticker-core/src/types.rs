//! Re-export of foundational types from `ticker-types`.
// Consolidated re-exports so drivers can depend on `ticker-core` only

pub use ticker_types::{DriverKey, QuoteError};
pub use ticker_types::{DuplicatePolicy, RegistryConfig};
pub use ticker_types::{QuoteBatch, SkipReason, SkippedQuote, StockQuote};
