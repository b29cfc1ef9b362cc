use std::sync::Arc;

use btcquote_core::{tools, PriceRegistry};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub registry: PriceRegistry,
    /// Discovery payload serialized exactly once, so the discovery route and
    /// the SSE handshake emit identical bytes.
    pub discovery_json: String,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let registry = PriceRegistry::with_default_providers(config.coinmarketcap_api_key.clone());
    let discovery_json = serde_json::to_string(&tools::describe())?;
    Ok(Arc::new(AppState {
        registry,
        discovery_json,
    }))
}
