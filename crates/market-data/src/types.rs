// In crates/market-data/src/types.rs

use crate::{Error, Result};
use chrono::NaiveDateTime;
use core_types::PriceObservation;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Top-level payload of the `CURRENCY_EXCHANGE_RATE` endpoint.
#[derive(Debug, Deserialize)]
pub struct ExchangeRatePayload {
    #[serde(rename = "Realtime Currency Exchange Rate")]
    pub quote: RealtimeExchangeRate,
}

/// The raw quote object as the provider sends it: every value is a string.
#[derive(Debug, Deserialize)]
pub struct RealtimeExchangeRate {
    #[serde(rename = "1. From_Currency Code")]
    pub from_currency_code: String,
    #[serde(rename = "3. To_Currency Code")]
    pub to_currency_code: String,
    #[serde(rename = "5. Exchange Rate")]
    pub exchange_rate: String,
    #[serde(rename = "6. Last Refreshed")]
    pub last_refreshed: String,
    #[serde(rename = "7. Time Zone")]
    pub time_zone: String,
}

impl RealtimeExchangeRate {
    /// Converts the raw string fields into our clean, internal observation
    /// type. The provider timestamps quotes in UTC.
    pub fn to_observation(&self) -> Result<PriceObservation> {
        let rate = Decimal::from_str(&self.exchange_rate).map_err(|e| {
            Error::MalformedPayload(format!(
                "exchange rate {:?} is not a number: {}",
                self.exchange_rate, e
            ))
        })?;

        let timestamp = NaiveDateTime::parse_from_str(&self.last_refreshed, "%Y-%m-%d %H:%M:%S")
            .map_err(|e| {
                Error::MalformedPayload(format!(
                    "last refreshed {:?} is not a timestamp: {}",
                    self.last_refreshed, e
                ))
            })?
            .and_utc();

        Ok(PriceObservation { timestamp, rate })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const PAYLOAD: &str = r#"{
        "Realtime Currency Exchange Rate": {
            "1. From_Currency Code": "BTC",
            "2. From_Currency Name": "Bitcoin",
            "3. To_Currency Code": "EUR",
            "4. To_Currency Name": "Euro",
            "5. Exchange Rate": "10034.50000000",
            "6. Last Refreshed": "2020-10-12 21:55:01",
            "7. Time Zone": "UTC",
            "8. Bid Price": "10034.49000000",
            "9. Ask Price": "10034.50000000"
        }
    }"#;

    #[test]
    fn parses_the_provider_payload() {
        let payload: ExchangeRatePayload = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(payload.quote.from_currency_code, "BTC");
        assert_eq!(payload.quote.to_currency_code, "EUR");

        let observation = payload.quote.to_observation().unwrap();
        assert_eq!(observation.rate.to_string(), "10034.50000000");
        assert_eq!(
            observation.timestamp,
            Utc.with_ymd_and_hms(2020, 10, 12, 21, 55, 1).unwrap()
        );
    }

    #[test]
    fn rejects_a_non_numeric_rate() {
        let quote = RealtimeExchangeRate {
            from_currency_code: "BTC".into(),
            to_currency_code: "EUR".into(),
            exchange_rate: "not-a-number".into(),
            last_refreshed: "2020-10-12 21:55:01".into(),
            time_zone: "UTC".into(),
        };
        assert!(matches!(
            quote.to_observation(),
            Err(Error::MalformedPayload(_))
        ));
    }
}
