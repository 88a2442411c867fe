//! Integration tests for the quote client against a mocked provider.

use app_config::types::MarketDataSettings;
use chrono::{TimeZone, Utc};
use market_data::{Error, QuoteClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(base_url: String) -> MarketDataSettings {
    MarketDataSettings {
        base_url,
        api_key: "test-key".to_string(),
        from_currency: "BTC".to_string(),
        to_currency: "EUR".to_string(),
        poll_interval_secs: 300,
        history_path: "data/btc_trend.csv".to_string(),
    }
}

#[tokio::test]
async fn fetches_and_parses_the_latest_rate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "CURRENCY_EXCHANGE_RATE"))
        .and(query_param("from_currency", "BTC"))
        .and(query_param("to_currency", "EUR"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "Realtime Currency Exchange Rate": {
                    "1. From_Currency Code": "BTC",
                    "2. From_Currency Name": "Bitcoin",
                    "3. To_Currency Code": "EUR",
                    "4. To_Currency Name": "Euro",
                    "5. Exchange Rate": "9876.54321000",
                    "6. Last Refreshed": "2020-10-12 21:55:01",
                    "7. Time Zone": "UTC",
                    "8. Bid Price": "9876.50000000",
                    "9. Ask Price": "9876.60000000"
                }
            }"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = QuoteClient::new(&settings(server.uri()));
    let observation = client.latest_rate().await.unwrap();

    assert_eq!(observation.rate.to_string(), "9876.54321000");
    assert_eq!(
        observation.timestamp,
        Utc.with_ymd_and_hms(2020, 10, 12, 21, 55, 1).unwrap()
    );
}

#[tokio::test]
async fn surfaces_the_provider_error_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"Error Message": "Invalid API call."}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = QuoteClient::new(&settings(server.uri()));
    let result = client.latest_rate().await;

    match result {
        Err(Error::ApiError { msg }) => assert_eq!(msg, "Invalid API call."),
        other => panic!("expected ApiError, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn surfaces_the_rate_limit_note() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"Note": "Thank you for using our API. Please slow down."}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = QuoteClient::new(&settings(server.uri()));
    assert!(matches!(
        client.latest_rate().await,
        Err(Error::ApiError { .. })
    ));
}
