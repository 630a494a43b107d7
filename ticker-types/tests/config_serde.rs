use ticker_types::{
    DuplicatePolicy, QuoteBatch, QuoteError, RegistryConfig, SkipReason, SkippedQuote, StockQuote,
};

#[test]
fn registry_config_defaults_to_reject() {
    let de: RegistryConfig = serde_json::from_str("{}").expect("deserialize empty config");
    assert_eq!(de.on_duplicate, DuplicatePolicy::Reject);
    assert_eq!(de, RegistryConfig::default());
}

#[test]
fn registry_config_reads_replace() {
    let de: RegistryConfig =
        serde_json::from_str(r#"{"on_duplicate":"Replace"}"#).expect("deserialize config");
    assert_eq!(de.on_duplicate, DuplicatePolicy::Replace);
}

#[test]
fn batch_reports_skips() {
    let batch = QuoteBatch {
        quotes: vec![StockQuote::new("AAPL", 150.25)],
        skipped: vec![SkippedQuote {
            symbol: "MSFT".into(),
            raw_price: Some("N/A".into()),
            reason: SkipReason::InvalidPrice {
                detail: "invalid float literal".into(),
            },
        }],
    };
    assert!(!batch.is_complete());
    assert!(!batch.is_empty());
    assert_eq!(batch.into_quotes(), vec![StockQuote::new("AAPL", 150.25)]);
    assert!(QuoteBatch::default().is_empty());
}

#[test]
fn error_helpers_tag_driver() {
    let t = QuoteError::transport("yahoo", "connection refused");
    assert!(t.is_transport());
    assert!(!t.is_decode());
    assert_eq!(t.driver(), Some("yahoo"));

    let d = QuoteError::decode("yahoo", "expected value");
    assert!(d.is_decode());
    assert_eq!(d.driver(), Some("yahoo"));

    assert_eq!(QuoteError::unknown_driver("nope").driver(), None);
}

#[test]
fn error_survives_serde() {
    let err = QuoteError::duplicate_driver("yahoo");
    let json = serde_json::to_string(&err).expect("serialize error");
    let de: QuoteError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(de, err);
}
