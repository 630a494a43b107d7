#![cfg(feature = "test-adapters")]

use std::sync::{Arc, Mutex};

use ticker_core::{Driver, QuoteError, StockQuote};
use ticker_yahoo::{YahooDriver, adapter};

#[tokio::test]
async fn handle_uses_injected_transport() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_in = Arc::clone(&seen);
    let transport = <dyn adapter::YahooTransport>::from_fn(move |url| {
        seen_in.lock().unwrap().push(url.to_string());
        Ok(br#"{"query":{"count":1,"results":{"quote":{"Symbol":"AAPL","LastTradePriceOnly":"123.45"}}}}"#.to_vec())
    });

    let yf = YahooDriver::with_transport(transport);
    let handle = yf.open("default").unwrap();
    let quotes = handle.retrieve(&["AAPL".to_string()]).await.unwrap();
    assert_eq!(quotes, vec![StockQuote::new("AAPL", 123.45)]);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].starts_with("https://query.yahooapis.com/v1/public/yql?"));
    assert!(seen[0].contains("format=json"));
}

#[tokio::test]
async fn transport_error_passes_through_unchanged() {
    let transport = <dyn adapter::YahooTransport>::from_fn(|_url| {
        Err(QuoteError::transport("yahoo", "connection reset"))
    });

    let handle = YahooDriver::with_transport(transport).open("default").unwrap();
    let err = handle.retrieve(&["AAPL".to_string()]).await.unwrap_err();
    assert_eq!(err, QuoteError::transport("yahoo", "connection reset"));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let transport =
        <dyn adapter::YahooTransport>::from_fn(|_url| Ok(b"<html>maintenance</html>".to_vec()));

    let handle = YahooDriver::with_transport(transport).open("default").unwrap();
    let err = handle.retrieve_batch(&["AAPL".to_string()]).await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn builder_prefers_injected_transport() {
    let transport = <dyn adapter::YahooTransport>::from_fn(|url| {
        assert_eq!(url.host_str(), Some("yql.internal"));
        Ok(br#"{"query":{"count":0,"results":null}}"#.to_vec())
    });

    let yf = YahooDriver::builder()
        .endpoint("http://yql.internal/v1/public/yql")
        .client(reqwest_client())
        .transport(transport)
        .build()
        .unwrap();
    let quotes = yf.open("default").unwrap().retrieve(&[]).await.unwrap();
    assert!(quotes.is_empty());
}

fn reqwest_client() -> reqwest::Client {
    reqwest::Client::new()
}
