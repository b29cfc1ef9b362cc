use async_trait::async_trait;
use chrono::{DateTime, Utc};
use num_traits::FromPrimitive;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::models::{PriceRecord, PriceSource};
use crate::provider::traits::PriceProvider;

const BASE_URL: &str = "https://pro-api.coinmarketcap.com/v1/cryptocurrency/quotes/latest";
const PROVIDER_ID: &str = "COINMARKETCAP";

/// Keyed primary provider (CoinMarketCap Pro API).
///
/// The key is optional at construction; a missing or empty key is reported
/// as [`ProviderError::MissingApiKey`] before any network call, so the
/// registry falls straight through to the free provider.
pub struct CoinMarketCapProvider {
    client: Client,
    api_key: Option<String>,
}

impl CoinMarketCapProvider {
    pub fn new(api_key: Option<String>) -> Self {
        CoinMarketCapProvider {
            client: Client::new(),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuotesResponse {
    data: QuotesData,
}

#[derive(Debug, Deserialize)]
struct QuotesData {
    #[serde(rename = "BTC")]
    btc: CurrencyEntry,
}

#[derive(Debug, Deserialize)]
struct CurrencyEntry {
    quote: QuoteMap,
}

#[derive(Debug, Deserialize)]
struct QuoteMap {
    #[serde(rename = "USD")]
    usd: UsdQuote,
}

#[derive(Debug, Deserialize)]
struct UsdQuote {
    price: f64,
    percent_change_24h: f64,
    market_cap: f64,
    // Already absolute (RFC 3339), passes through unchanged.
    last_updated: DateTime<Utc>,
}

fn normalize(quote: UsdQuote) -> Result<PriceRecord, ProviderError> {
    let to_decimal = |value: f64, field: &str| {
        Decimal::from_f64(value)
            .ok_or_else(|| ProviderError::InvalidData(format!("non-finite {field}: {value}")))
    };
    Ok(PriceRecord::new(
        to_decimal(quote.price, "price")?,
        to_decimal(quote.percent_change_24h, "percent_change_24h")?,
        to_decimal(quote.market_cap, "market_cap")?,
        quote.last_updated,
        PriceSource::CoinMarketCap,
    ))
}

#[async_trait]
impl PriceProvider for CoinMarketCapProvider {
    fn source(&self) -> PriceSource {
        PriceSource::CoinMarketCap
    }

    async fn fetch_price(&self) -> Result<PriceRecord, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ProviderError::MissingApiKey(PROVIDER_ID))?;

        let response = self
            .client
            .get(BASE_URL)
            .query(&[("symbol", "BTC"), ("convert", "USD")])
            .header("X-CMC_PRO_API_KEY", api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER_ID,
                status: response.status().as_u16(),
            });
        }

        let payload: QuotesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidData(e.to_string()))?;
        normalize(payload.data.btc.quote.usd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"{
        "data": {
            "BTC": {
                "quote": {
                    "USD": {
                        "price": 43000.1,
                        "percent_change_24h": -2.3456,
                        "market_cap": 845123456789.01,
                        "last_updated": "2024-01-15T12:34:56.000Z"
                    }
                }
            }
        }
    }"#;

    #[test]
    fn normalizes_quote_payload() {
        let payload: QuotesResponse = serde_json::from_str(SAMPLE).unwrap();
        let record = normalize(payload.data.btc.quote.usd).unwrap();

        assert_eq!(record.source, PriceSource::CoinMarketCap);
        assert_eq!(record.price, dec!(43000.10));
        assert_eq!(record.percent_change_24h, dec!(-2.35));
        assert_eq!(record.last_updated.to_rfc3339(), "2024-01-15T12:34:56+00:00");
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let quote = UsdQuote {
            price: f64::NAN,
            percent_change_24h: 0.0,
            market_cap: 0.0,
            last_updated: Utc::now(),
        };
        assert!(matches!(
            normalize(quote),
            Err(ProviderError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_network_call() {
        let provider = CoinMarketCapProvider::new(None);
        assert!(matches!(
            provider.fetch_price().await,
            Err(ProviderError::MissingApiKey(_))
        ));

        let provider = CoinMarketCapProvider::new(Some("  ".to_string()));
        assert!(matches!(
            provider.fetch_price().await,
            Err(ProviderError::MissingApiKey(_))
        ));
    }
}
