use std::env;
use std::time::Duration;

use url::Url;

/// The proxy the freeCodeCamp stock checker exposes; overridable for other
/// quote backends.
const DEFAULT_QUOTE_API_BASE: &str = "https://stock-price-checker-proxy.freecodecamp.rocks/";

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub quote_api_base: Url,
    pub quote_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable not set"))?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("Invalid PORT value"))?;

        let quote_api_base = env::var("QUOTE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_QUOTE_API_BASE.to_string())
            .parse::<Url>()
            .map_err(|_| anyhow::anyhow!("Invalid QUOTE_API_BASE value"))?;

        let quote_timeout = env::var("QUOTE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| anyhow::anyhow!("Invalid QUOTE_TIMEOUT_SECS value"))?;

        Ok(Config {
            database_url,
            port,
            quote_api_base,
            quote_timeout,
        })
    }
}
