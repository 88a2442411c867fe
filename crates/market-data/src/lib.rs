// In crates/market-data/src/lib.rs

use app_config::types::MarketDataSettings;
use core_types::PriceObservation;
use serde_json::Value;

pub mod error;
pub mod history;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use history::TrendHistory;
pub use types::{ExchangeRatePayload, RealtimeExchangeRate};

/// HTTP client for the exchange-rate quote provider.
pub struct QuoteClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    from_currency: String,
    to_currency: String,
}

impl QuoteClient {
    /// Constructs a new QuoteClient from MarketDataSettings.
    pub fn new(settings: &MarketDataSettings) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            from_currency: settings.from_currency.clone(),
            to_currency: settings.to_currency.clone(),
        }
    }

    /// Fetches the current exchange rate for the configured pair.
    ///
    /// This corresponds to the `GET /query?function=CURRENCY_EXCHANGE_RATE`
    /// endpoint.
    pub async fn latest_rate(&self) -> Result<PriceObservation> {
        let url = format!("{}/query", self.base_url);
        tracing::debug!(
            url = %url,
            from = %self.from_currency,
            to = %self.to_currency,
            "Fetching the latest exchange rate."
        );

        let response_body = self
            .http_client
            .get(&url)
            .query(&[
                ("function", "CURRENCY_EXCHANGE_RATE"),
                ("from_currency", self.from_currency.as_str()),
                ("to_currency", self.to_currency.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(Error::RequestFailed)?
            .text()
            .await
            .map_err(Error::RequestFailed)?;

        let value: Value = serde_json::from_str(&response_body).map_err(Error::DeserializationFailed)?;

        // The provider returns an error object on failure, so we check for
        // that first. A "Note" is the rate-limit response.
        if let Some(msg) = value.get("Error Message").and_then(Value::as_str) {
            return Err(Error::ApiError { msg: msg.to_string() });
        }
        if let Some(note) = value.get("Note").and_then(Value::as_str) {
            return Err(Error::ApiError { msg: note.to_string() });
        }

        // If no error object, deserialize into our target struct.
        let payload: ExchangeRatePayload =
            serde_json::from_value(value).map_err(Error::DeserializationFailed)?;

        payload.quote.to_observation()
    }
}
