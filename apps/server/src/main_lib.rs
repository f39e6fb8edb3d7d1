use std::{sync::Arc, time::Duration};

use crate::config::Config;
use cryptodash_market_data::{AlpacaProvider, MarketDataProvider, MarketDataService};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub market_data_service: MarketDataService,
    /// Upper bound on one proxied request, upstream call included.
    pub request_timeout: Duration,
}

pub fn init_tracing() {
    let log_format = std::env::var("CD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = reqwest::Client::builder().build()?;
    Ok(build_state_with_client(config, client))
}

/// Same as [`build_state`] with a caller-supplied HTTP client.
pub fn build_state_with_client(config: &Config, client: reqwest::Client) -> Arc<AppState> {
    let upstream = &config.upstream;
    if upstream.credentials.is_none() {
        tracing::warn!(
            "ALPACA_API_KEY / ALPACA_SECRET_KEY are not set; market data requests will fail"
        );
    }

    let provider: Arc<dyn MarketDataProvider> = Arc::new(AlpacaProvider::new(
        client,
        upstream.base_url.clone(),
        upstream.credentials.clone(),
    ));
    let market_data_service = MarketDataService::new(provider);
    tracing::info!(
        "Market data upstream: {} ({})",
        market_data_service.provider_id(),
        upstream.base_url
    );

    Arc::new(AppState {
        market_data_service,
        request_timeout: config.request_timeout,
    })
}
