//! Static price table, as the provider would report it (prices are strings).

const PRICES: &[(&str, &str)] = &[
    ("AAPL", "150.25"),
    ("MSFT", "310.50"),
    ("GOOG", "532.11"),
    ("TSLA", "212.80"),
    ("YHOO", "36.10"),
    // listed but without a usable price
    ("NA", "N/A"),
];

/// Raw price text for `symbol`, if the symbol is known.
pub fn raw_price(symbol: &str) -> Option<&'static str> {
    PRICES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, p)| *p)
}
