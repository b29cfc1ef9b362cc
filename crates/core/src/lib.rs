//! Bitcoin price lookup core.
//!
//! Provider-agnostic BTC/USD price fetching with ordered fallback, plus the
//! static tool schema the protocol server advertises to callers.
//!
//! # Overview
//!
//! - [`PriceProvider`] - trait implemented by each upstream client
//! - [`PriceRegistry`] - tries providers in priority order, falls through on
//!   any per-provider error
//! - [`PriceRecord`] - canonical, display-grade result of one lookup
//! - [`tools::describe`] - the discovery payload for the single
//!   `get-bitcoin-price` tool

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;
pub mod tools;

pub use errors::{FetchError, ProviderError};
pub use models::{PriceRecord, PriceSource};
pub use provider::{CoinGeckoProvider, CoinMarketCapProvider, PriceProvider};
pub use registry::PriceRegistry;
pub use tools::{DiscoveryPayload, ToolDescriptor, TOOL_GET_BITCOIN_PRICE};
