//! Conversion of decoded provider items into normalized quotes.

use ticker_core::{QuoteBatch, QuoteError, SkipReason, SkippedQuote, StockQuote};

use crate::wire::{self, QuoteSet, RawQuoteItem};

/// Parse a provider price string.
///
/// # Errors
/// Returns the [`SkipReason`] describing why the price is unusable.
pub fn parse_price(raw: Option<&str>) -> Result<f64, SkipReason> {
    let raw = raw.ok_or(SkipReason::MissingPrice)?;
    let price: f64 = raw.parse().map_err(|e: std::num::ParseFloatError| {
        SkipReason::InvalidPrice {
            detail: e.to_string(),
        }
    })?;
    if price.is_finite() {
        Ok(price)
    } else {
        Err(SkipReason::NonFinitePrice)
    }
}

fn push_item(mut batch: QuoteBatch, item: RawQuoteItem) -> QuoteBatch {
    match parse_price(item.last_trade_price_only.as_deref()) {
        Ok(price) => batch.quotes.push(StockQuote::new(item.symbol(), price)),
        Err(reason) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "ticker_yahoo::normalize",
                symbol = item.symbol(),
                raw_price = item.last_trade_price_only.as_deref().unwrap_or(""),
                %reason,
                "skipping quote with unusable price"
            );
            batch.skipped.push(SkippedQuote {
                symbol: item.symbol().to_string(),
                raw_price: item.last_trade_price_only,
                reason,
            });
        }
    }
    batch
}

/// Fold decoded items into a [`QuoteBatch`], keeping upstream order.
///
/// Items whose price cannot be parsed are moved to `skipped`; the rest of the
/// batch is unaffected.
#[must_use]
pub fn normalize(set: QuoteSet) -> QuoteBatch {
    set.into_items()
        .into_iter()
        .fold(QuoteBatch::default(), push_item)
}

/// Decode a response body and normalize it.
///
/// # Errors
/// Propagates `QuoteError::Decode` from [`wire::decode`]. Price failures are
/// reported in the batch, never as an error.
pub fn parse_response(body: &[u8]) -> Result<QuoteBatch, QuoteError> {
    let set = wire::decode(body)?;
    Ok(normalize(set))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_parsing() {
        assert_eq!(parse_price(Some("150.25")), Ok(150.25));
        assert_eq!(parse_price(Some("0")), Ok(0.0));
        assert_eq!(parse_price(None), Err(SkipReason::MissingPrice));
        assert!(matches!(
            parse_price(Some("N/A")),
            Err(SkipReason::InvalidPrice { .. })
        ));
        assert!(matches!(
            parse_price(Some("")),
            Err(SkipReason::InvalidPrice { .. })
        ));
        assert_eq!(parse_price(Some("NaN")), Err(SkipReason::NonFinitePrice));
        assert_eq!(parse_price(Some("inf")), Err(SkipReason::NonFinitePrice));
    }

    #[test]
    fn surrounding_whitespace_is_not_trimmed() {
        assert!(matches!(
            parse_price(Some(" 1.5")),
            Err(SkipReason::InvalidPrice { .. })
        ));
    }

    #[test]
    fn fold_preserves_order_and_records_skips() {
        let set = QuoteSet::Many(vec![
            RawQuoteItem::new("AAPL", Some("150.25")),
            RawQuoteItem::new("BOGUS", Some("N/A")),
            RawQuoteItem::new("MSFT", Some("310.5")),
            RawQuoteItem::new("GONE", None),
        ]);
        let batch = normalize(set);
        assert_eq!(
            batch.quotes,
            vec![
                StockQuote::new("AAPL", 150.25),
                StockQuote::new("MSFT", 310.5)
            ]
        );
        let skipped: Vec<(&str, Option<&str>)> = batch
            .skipped
            .iter()
            .map(|s| (s.symbol.as_str(), s.raw_price.as_deref()))
            .collect();
        assert_eq!(skipped, vec![("BOGUS", Some("N/A")), ("GONE", None)]);
        assert_eq!(batch.skipped[1].reason, SkipReason::MissingPrice);
    }

    #[test]
    fn empty_set_gives_empty_batch() {
        assert!(normalize(QuoteSet::Empty).is_empty());
    }
}
