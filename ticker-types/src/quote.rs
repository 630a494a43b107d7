//! Normalized quotes and the per-call batch report.

use serde::{Deserialize, Serialize};

/// A normalized price quote; the only shape that crosses the driver boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Ticker symbol as reported by the provider.
    pub symbol: String,
    /// Last trade price.
    pub last_trade_price: f64,
}

impl StockQuote {
    /// Build a quote from a symbol and price.
    pub fn new(symbol: impl Into<String>, last_trade_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            last_trade_price,
        }
    }
}

/// Why a decoded item was dropped from a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkipReason {
    /// The price field was absent or null.
    MissingPrice,
    /// The price string is not a number.
    InvalidPrice {
        /// Parser message.
        detail: String,
    },
    /// The price parsed to NaN or an infinity.
    NonFinitePrice,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPrice => f.write_str("missing price"),
            Self::InvalidPrice { detail } => write!(f, "invalid price: {detail}"),
            Self::NonFinitePrice => f.write_str("non-finite price"),
        }
    }
}

/// An item that decoded successfully but could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedQuote {
    /// Symbol of the dropped item.
    pub symbol: String,
    /// Raw price text as received, if any.
    pub raw_price: Option<String>,
    /// Reason the item was dropped.
    pub reason: SkipReason,
}

/// Result of one retrieve call: the normalized quotes in upstream order and
/// the items that were dropped along the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteBatch {
    /// Normalized quotes, in upstream order.
    pub quotes: Vec<StockQuote>,
    /// Items dropped because their price could not be parsed.
    pub skipped: Vec<SkippedQuote>,
}

impl QuoteBatch {
    /// True when no item was skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// True when the batch carries neither quotes nor skipped items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty() && self.skipped.is_empty()
    }

    /// Consume the batch, keeping only the normalized quotes.
    #[must_use]
    pub fn into_quotes(self) -> Vec<StockQuote> {
        self.quotes
    }
}
