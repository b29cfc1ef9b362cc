//! Price provider trait definition.

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::{PriceRecord, PriceSource};

/// Trait for upstream BTC/USD price sources.
///
/// Implement this trait to add another upstream; the registry iterates
/// providers in priority order and falls through on any error, so new
/// providers need no orchestration changes.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Which upstream this client talks to. Stamped into every record it
    /// returns.
    fn source(&self) -> PriceSource;

    /// Fetch the current BTC/USD quote.
    ///
    /// Issues exactly one outbound request per call. Every failure mode,
    /// including a missing credential, surfaces as a [`ProviderError`].
    async fn fetch_price(&self) -> Result<PriceRecord, ProviderError>;
}
