pub mod coingecko;
pub mod coinmarketcap;
mod traits;

pub use coingecko::CoinGeckoProvider;
pub use coinmarketcap::CoinMarketCapProvider;
pub use traits::PriceProvider;
