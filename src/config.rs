// Configuration module: everything the client needs from the process
// environment is read once at startup and handed around as a `Config`.

use std::time::Duration;

/// Environment variable holding the base URL of the AISHE API.
pub const URL_ENV: &str = "AISHE_URL";

/// Path appended to the base URL for the ask endpoint.
pub const ASK_PATH: &str = "/api/v1/ask";

/// Client-side timeout covering the whole request/response round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Config {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Build a config from `AISHE_URL`. A missing variable yields an empty
    /// base URL; the request will then fail when it is sent.
    pub fn from_env() -> Self {
        let base_url = std::env::var(URL_ENV).unwrap_or_default();
        tracing::debug!(base_url = %base_url, "loaded configuration");
        Config::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Full URL of the ask endpoint. Plain concatenation, no normalisation.
    pub fn ask_url(&self) -> String {
        format!("{}{}", self.base_url, ASK_PATH)
    }
}
