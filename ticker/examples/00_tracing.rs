mod common;
use ticker::Registry;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,ticker=trace,ticker_yahoo=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let driver = common::get_driver();
    let name = driver.name();
    let registry = Registry::builder().with_driver(name, driver).build()?;

    // Skipped prices show up as warn events from the yahoo driver.
    let tickers = vec!["AAPL".to_string(), "GOOG".to_string(), "NA".to_string()];
    let _ = registry.retrieve(name, &tickers).await?;

    Ok(())
}
