//! Static tool schema advertised to callers.
//!
//! The registry is a pure value: [`describe`] builds the same payload every
//! time, with `BTreeMap` keying so serialization is deterministic. The
//! server serializes it once at startup and reuses those exact bytes for
//! the discovery route and the first SSE event.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

pub const SCHEMA_VERSION: &str = "1.0";
pub const TOOL_GET_BITCOIN_PRICE: &str = "get-bitcoin-price";

/// Schema entry for one exposed tool. Immutable for the process lifetime.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub output_schema: Value,
}

/// What callers receive from the discovery route and the SSE handshake.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryPayload {
    pub schema_version: String,
    pub tools: BTreeMap<String, ToolDescriptor>,
}

/// Build the discovery payload. Pure and deterministic; callable any number
/// of times, including concurrently.
pub fn describe() -> DiscoveryPayload {
    let descriptor = ToolDescriptor {
        name: TOOL_GET_BITCOIN_PRICE.to_string(),
        description: "Get the current Bitcoin price in USD, with 24h change and market cap. \
                      Sourced from CoinMarketCap with automatic CoinGecko fallback."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
        output_schema: json!({
            "type": "object",
            "properties": {
                "price": {
                    "type": "string",
                    "description": "Current BTC price in USD, two fraction digits"
                },
                "percentChange24h": {
                    "type": "string",
                    "description": "Signed 24h price change in percent, two fraction digits"
                },
                "marketCap": {
                    "type": "string",
                    "description": "Total market capitalization in USD, two fraction digits"
                },
                "lastUpdated": {
                    "type": "string",
                    "description": "Provider-reported UTC timestamp, RFC 3339"
                },
                "source": {
                    "type": "string",
                    "description": "Upstream that answered: coinmarketcap or coingecko"
                }
            },
            "required": ["price", "percentChange24h", "marketCap", "lastUpdated", "source"]
        }),
    };

    let mut tools = BTreeMap::new();
    tools.insert(TOOL_GET_BITCOIN_PRICE.to_string(), descriptor);
    DiscoveryPayload {
        schema_version: SCHEMA_VERSION.to_string(),
        tools,
    }
}
