use async_trait::async_trait;
use chrono::DateTime;
use num_traits::FromPrimitive;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::models::{PriceRecord, PriceSource};
use crate::provider::traits::PriceProvider;

const BASE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
const PROVIDER_ID: &str = "COINGECKO";

/// Free fallback provider (CoinGecko simple price API). No credential
/// required.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        CoinGeckoProvider {
            client: Client::new(),
        }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    bitcoin: BitcoinEntry,
}

#[derive(Debug, Deserialize)]
struct BitcoinEntry {
    usd: f64,
    usd_market_cap: f64,
    usd_24h_change: f64,
    // Epoch seconds, converted to an absolute UTC timestamp.
    last_updated_at: i64,
}

fn normalize(entry: BitcoinEntry) -> Result<PriceRecord, ProviderError> {
    let to_decimal = |value: f64, field: &str| {
        Decimal::from_f64(value)
            .ok_or_else(|| ProviderError::InvalidData(format!("non-finite {field}: {value}")))
    };
    let last_updated = DateTime::from_timestamp(entry.last_updated_at, 0).ok_or_else(|| {
        ProviderError::InvalidData(format!(
            "timestamp out of range: {}",
            entry.last_updated_at
        ))
    })?;
    Ok(PriceRecord::new(
        to_decimal(entry.usd, "usd")?,
        to_decimal(entry.usd_24h_change, "usd_24h_change")?,
        to_decimal(entry.usd_market_cap, "usd_market_cap")?,
        last_updated,
        PriceSource::CoinGecko,
    ))
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn source(&self) -> PriceSource {
        PriceSource::CoinGecko
    }

    async fn fetch_price(&self) -> Result<PriceRecord, ProviderError> {
        let response = self
            .client
            .get(BASE_URL)
            .query(&[
                ("ids", "bitcoin"),
                ("vs_currencies", "usd"),
                ("include_market_cap", "true"),
                ("include_24hr_change", "true"),
                ("include_last_updated_at", "true"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER_ID,
                status: response.status().as_u16(),
            });
        }

        let payload: SimplePriceResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidData(e.to_string()))?;
        normalize(payload.bitcoin)
    }
}
