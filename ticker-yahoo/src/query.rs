//! YQL query and request URL construction.

use url::Url;

/// Public YQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://query.yahooapis.com/v1/public/yql";

/// Community datatable store that defines `yahoo.finance.quotes`.
pub const DEFAULT_ENV: &str = "store://datatables.org/alltableswithkeys";

const SELECT_PREFIX: &str = "select * from yahoo.finance.quotes where symbol in ";

/// Build the YQL statement selecting quotes for `tickers`.
///
/// Tickers are double-quoted and comma-separated in input order; an empty
/// slice yields `()`. Embedded `"` characters are not escaped, so a ticker
/// containing one produces a malformed statement.
pub fn build_query<S: AsRef<str>>(tickers: &[S]) -> String {
    let list = tickers
        .iter()
        .map(|t| format!("\"{}\"", t.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    format!("{SELECT_PREFIX}({list})")
}

/// Full GET URL for `tickers`: `endpoint` plus `env`, `format=json` and `q`.
#[must_use]
pub fn request_url<S: AsRef<str>>(endpoint: &Url, env: &str, tickers: &[S]) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("env", env)
        .append_pair("format", "json")
        .append_pair("q", &build_query(tickers));
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_parenthesized() {
        let empty: [&str; 0] = [];
        assert_eq!(
            build_query(&empty),
            "select * from yahoo.finance.quotes where symbol in ()"
        );
    }

    #[test]
    fn single_and_pair() {
        assert_eq!(
            build_query(&["AAPL"]),
            "select * from yahoo.finance.quotes where symbol in (\"AAPL\")"
        );
        assert_eq!(
            build_query(&["AAPL", "MSFT"]),
            "select * from yahoo.finance.quotes where symbol in (\"AAPL\",\"MSFT\")"
        );
    }

    #[test]
    fn url_carries_all_parameters() {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).unwrap();
        let url = request_url(&endpoint, DEFAULT_ENV, &["YHOO", "GOOG"]);
        assert_eq!(url.path(), "/v1/public/yql");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("env".to_string(), DEFAULT_ENV.to_string()),
                ("format".to_string(), "json".to_string()),
                (
                    "q".to_string(),
                    "select * from yahoo.finance.quotes where symbol in (\"YHOO\",\"GOOG\")"
                        .to_string()
                ),
            ]
        );
    }

    #[test]
    fn url_keeps_existing_endpoint_query() {
        let endpoint = Url::parse("http://localhost:8080/yql?diagnostics=true").unwrap();
        let url = request_url(&endpoint, DEFAULT_ENV, &["AAPL"]);
        let first = url.query_pairs().next().unwrap();
        assert_eq!(first.0, "diagnostics");
        assert_eq!(url.query_pairs().count(), 4);
    }
}
