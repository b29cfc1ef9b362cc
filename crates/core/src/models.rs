use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upstream that answered a lookup.
///
/// Order matters: `CoinMarketCap` is the keyed primary, `CoinGecko` the free
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    CoinMarketCap,
    CoinGecko,
}

impl PriceSource {
    /// Stable identifier used in logs.
    pub fn id(&self) -> &'static str {
        match self {
            PriceSource::CoinMarketCap => "COINMARKETCAP",
            PriceSource::CoinGecko => "COINGECKO",
        }
    }
}

/// Canonical result of one successful price lookup.
///
/// All numeric fields are display-grade: rescaled to exactly two fraction
/// digits at construction, so `43000.1` upstream serializes as `"43000.10"`.
/// `last_updated` is the provider-reported timestamp, not the wall clock of
/// the request. Records are built whole in [`PriceRecord::new`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub price: Decimal,
    pub percent_change_24h: Decimal,
    pub market_cap: Decimal,
    pub last_updated: DateTime<Utc>,
    pub source: PriceSource,
}

impl PriceRecord {
    pub fn new(
        price: Decimal,
        percent_change_24h: Decimal,
        market_cap: Decimal,
        last_updated: DateTime<Utc>,
        source: PriceSource,
    ) -> Self {
        Self {
            price: display_grade(price),
            percent_change_24h: display_grade(percent_change_24h),
            market_cap: display_grade(market_cap),
            last_updated,
            source,
        }
    }
}

/// Round to two fraction digits and pin the scale so trailing zeros survive
/// serialization. Display-grade only; not meant for further arithmetic.
fn display_grade(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}
