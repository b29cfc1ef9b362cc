use thiserror::Error;

/// Failure of a single provider attempt.
///
/// Everything a provider can do wrong collapses into this type; raw
/// transport errors never cross the provider boundary untyped. A missing
/// credential is its own variant because it is an expected fallback trigger,
/// not a network fault.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} requires an API key, which is not configured")]
    MissingApiKey(&'static str),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{provider} returned HTTP {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Terminal failure of one lookup, after every provider has been tried.
///
/// Deliberately carries no per-provider diagnostics; those are only logged.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch Bitcoin price from all providers")]
    AllProvidersFailed,
}
