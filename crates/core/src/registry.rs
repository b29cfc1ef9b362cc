use std::sync::Arc;

use log::{debug, warn};

use crate::errors::FetchError;
use crate::models::PriceRecord;
use crate::provider::{CoinGeckoProvider, CoinMarketCapProvider, PriceProvider};

/// Ordered collection of price providers with fall-through on failure.
///
/// Providers are tried strictly in the order given, one attempt each, and
/// the first success wins. Attempts are sequential: the next provider is
/// only contacted after the previous one has definitively failed.
pub struct PriceRegistry {
    providers: Vec<Arc<dyn PriceProvider>>,
}

impl PriceRegistry {
    pub fn new(providers: Vec<Arc<dyn PriceProvider>>) -> Self {
        Self { providers }
    }

    /// The production lineup: CoinMarketCap first (if keyed), CoinGecko as
    /// the free fallback. A missing key simply makes the first attempt fail
    /// over immediately.
    pub fn with_default_providers(coinmarketcap_api_key: Option<String>) -> Self {
        Self::new(vec![
            Arc::new(CoinMarketCapProvider::new(coinmarketcap_api_key)),
            Arc::new(CoinGeckoProvider::new()),
        ])
    }

    /// Fetch the current price from the first provider that answers.
    ///
    /// Per-provider failures are logged and absorbed here; callers only ever
    /// see [`FetchError::AllProvidersFailed`] once the whole list is
    /// exhausted.
    pub async fn get_price(&self) -> Result<PriceRecord, FetchError> {
        for provider in &self.providers {
            match provider.fetch_price().await {
                Ok(record) => {
                    debug!("Provider '{}' answered.", provider.source().id());
                    return Ok(record);
                }
                Err(e) => warn!(
                    "Provider '{}' failed to fetch price: {}. Trying next.",
                    provider.source().id(),
                    e
                ),
            }
        }
        Err(FetchError::AllProvidersFailed)
    }
}
