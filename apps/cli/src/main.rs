use anyhow::Context;
use clap::Parser;
use console::style;
use rust_decimal::Decimal;

use btcquote_core::PriceRegistry;

/// Fetch the current Bitcoin price and print a summary.
#[derive(Parser)]
#[command(
    name = "btcquote",
    about = "Current Bitcoin price from CoinMarketCap, with CoinGecko fallback"
)]
struct Cli {
    /// Print the raw record as JSON instead of the formatted summary.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let api_key = std::env::var("COINMARKETCAP_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    let registry = PriceRegistry::with_default_providers(api_key);
    let record = registry
        .get_price()
        .await
        .context("could not fetch the Bitcoin price")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let change = if record.percent_change_24h < Decimal::ZERO {
        style(format!("{}%", record.percent_change_24h)).red()
    } else {
        style(format!("+{}%", record.percent_change_24h)).green()
    };

    println!("{}", style("Bitcoin (BTC/USD)").bold());
    println!("  Price:        ${}", record.price);
    println!("  24h change:   {change}");
    println!("  Market cap:   ${}", record.market_cap);
    println!("  Last updated: {}", record.last_updated.to_rfc3339());
    println!("  Source:       {}", record.source.id());
    Ok(())
}
