use std::sync::Arc;
use ticker_core::Driver;

#[must_use]
pub fn get_driver() -> Arc<dyn Driver> {
    if std::env::var("TICKER_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Driver for CI) ---");
        Arc::new(ticker_mock::MockDriver::new())
    } else {
        Arc::new(ticker_yahoo::YahooDriver::new_default())
    }
}
