//! Wire shapes of the YQL JSON response and the cardinality-aware decoder.
//!
//! `query.results.quote` is an object when `query.count == 1`, an array when
//! the count is larger, and absent when it is zero. The count is read first
//! and selects the decode path; the ambiguous field is never decoded with a
//! single fixed shape.

use serde::Deserialize;
use serde_json::Value;
use ticker_core::QuoteError;

use crate::YahooDriver;

/// One quote item as the provider sends it. Prices arrive as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawQuoteItem {
    #[serde(rename = "Symbol", default)]
    symbol_upper: Option<String>,
    #[serde(rename = "symbol", default)]
    symbol_lower: Option<String>,
    /// Last trade price text, e.g. `"150.25"` or `"N/A"`.
    #[serde(rename = "LastTradePriceOnly", default)]
    pub last_trade_price_only: Option<String>,
}

impl RawQuoteItem {
    /// Build an item directly; used by tests and fixtures.
    pub fn new(symbol: impl Into<String>, last_trade_price_only: Option<&str>) -> Self {
        Self {
            symbol_upper: Some(symbol.into()),
            symbol_lower: None,
            last_trade_price_only: last_trade_price_only.map(str::to_string),
        }
    }

    /// Reported symbol; `"Symbol"` wins over `"symbol"`, empty when neither is present.
    #[must_use]
    pub fn symbol(&self) -> &str {
        self.symbol_upper
            .as_deref()
            .or(self.symbol_lower.as_deref())
            .unwrap_or_default()
    }
}

/// Decoded `results.quote`, keyed by the envelope count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteSet {
    /// `count == 0`.
    Empty,
    /// `count == 1`: `quote` is a single object.
    One(RawQuoteItem),
    /// `count > 1`: `quote` is an array, in upstream order.
    Many(Vec<RawQuoteItem>),
}

impl QuoteSet {
    /// Number of decoded items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    /// True for `Empty` and for an empty `Many`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into items, preserving order.
    #[must_use]
    pub fn into_items(self) -> Vec<RawQuoteItem> {
        match self {
            Self::Empty => Vec::new(),
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    query: QueryBlock,
}

#[derive(Debug, Deserialize)]
struct QueryBlock {
    count: u64,
    #[serde(default)]
    results: Option<Results>,
}

#[derive(Debug, Default, Deserialize)]
struct Results {
    #[serde(default)]
    quote: Option<Value>,
}

fn decode_err(context: &str, e: &serde_json::Error) -> QuoteError {
    QuoteError::decode(YahooDriver::NAME, format!("{context}: {e}"))
}

/// Decode a raw response body into a [`QuoteSet`].
///
/// # Errors
/// Returns `QuoteError::Decode` when the envelope is malformed, when the
/// `quote` field does not match the shape implied by `count`, or when
/// `count > 0` but `quote` is missing.
pub fn decode(body: &[u8]) -> Result<QuoteSet, QuoteError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|e| decode_err("envelope", &e))?;
    let QueryBlock { count, results } = envelope.query;

    if count == 0 {
        return Ok(QuoteSet::Empty);
    }

    let quote = results.and_then(|r| r.quote).ok_or_else(|| {
        QuoteError::decode(
            YahooDriver::NAME,
            format!("count is {count} but results.quote is missing"),
        )
    })?;

    if count == 1 {
        serde_json::from_value(quote)
            .map(QuoteSet::One)
            .map_err(|e| decode_err("single quote", &e))
    } else {
        serde_json::from_value(quote)
            .map(QuoteSet::Many)
            .map_err(|e| decode_err("quote array", &e))
    }
}
