mod common;
use ticker::Registry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Pick a driver (mock in CI when TICKER_EXAMPLES_USE_MOCK is set).
    let driver = common::get_driver();
    let name = driver.name();

    // 2. Register it explicitly.
    let registry = Registry::builder().with_driver(name, driver).build()?;

    // 3. Open a handle and fetch a batch.
    let handle = registry.open(name, "default")?;
    let tickers = vec!["AAPL".to_string(), "MSFT".to_string(), "NA".to_string()];
    let batch = handle.retrieve_batch(&tickers).await?;

    // 4. Print the result.
    for q in &batch.quotes {
        println!("{}: {}", q.symbol, q.last_trade_price);
    }
    for s in &batch.skipped {
        eprintln!("- {} skipped: {}", s.symbol, s.reason);
    }

    Ok(())
}
