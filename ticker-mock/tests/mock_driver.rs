use ticker_core::{Driver, QuoteError, StockQuote};
use ticker_mock::MockDriver;

fn list(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test]
async fn test_mock_known_and_unknown() {
    let handle = MockDriver::new().open("P0").unwrap();
    let quotes = handle
        .retrieve(&list(&["AAPL", "UNKNOWN", "MSFT"]))
        .await
        .expect("quotes ok");
    assert_eq!(
        quotes,
        vec![
            StockQuote::new("AAPL", 150.25),
            StockQuote::new("MSFT", 310.50)
        ]
    );
}

#[tokio::test]
async fn test_mock_skips_na() {
    let handle = MockDriver::new().open("P0").unwrap();
    let batch = handle
        .retrieve_batch(&list(&["NA", "GOOG"]))
        .await
        .expect("batch ok");
    assert_eq!(batch.quotes.len(), 1);
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].symbol, "NA");
}

#[tokio::test]
async fn test_mock_fail() {
    let handle = MockDriver::named("m2").open("P0").unwrap();
    let err = handle
        .retrieve(&list(&["AAPL", "FAIL"]))
        .await
        .expect_err("err");
    assert_eq!(err, QuoteError::transport("m2", "forced failure"));
}
