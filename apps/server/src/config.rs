use std::net::SocketAddr;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub coinmarketcap_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let listen_addr = SocketAddr::from(([0, 0, 0, 0], port));
        // Optional: absence just means the primary provider always fails
        // over to the free one.
        let coinmarketcap_api_key = std::env::var("COINMARKETCAP_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self {
            listen_addr,
            coinmarketcap_api_key,
        }
    }
}
