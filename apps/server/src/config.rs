use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use cryptodash_market_data::{AlpacaCredentials, DEFAULT_BASE_URL};

/// Upstream provider settings. Credentials come from the environment only,
/// never from request input.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub credentials: Option<AlpacaCredentials>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Prebuilt dashboard bundle, served with an `index.html` fallback.
    pub static_dir: Option<String>,
    pub upstream: UpstreamConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = var("CD_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid CD_LISTEN_ADDR")?;
        let cors_allow = var("CD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("CD_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = var("CD_STATIC_DIR").filter(|s| !s.trim().is_empty());

        let base_url = var("ALPACA_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        reqwest::Url::parse(&base_url)
            .with_context(|| format!("Invalid ALPACA_BASE_URL: {}", base_url))?;
        let credentials =
            AlpacaCredentials::from_parts(var("ALPACA_API_KEY"), var("ALPACA_SECRET_KEY"));

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            upstream: UpstreamConfig {
                base_url,
                credentials,
            },
        })
    }
}
