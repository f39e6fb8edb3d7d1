//! Alpaca market data provider implementation.
//!
//! This provider fetches crypto bars and news headlines from the Alpaca
//! data API. Requests authenticate with two static headers carrying the
//! API key id and secret.
//!
//! # API Endpoints
//!
//! - News: `{base}/v1beta1/news?sort=desc&limit=10&symbols={symbol}`
//! - Bars: `{base}/v2/crypto/{symbol}/bars?timeframe={timeframe}&limit={limit}`
//!
//! # Response Format
//!
//! Both endpoints return an object wrapping an array under `news` or `bars`.
//! Anything else is reported as [`MarketDataError::UnexpectedFormat`].

mod models;

use std::fmt;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::{Bar, BarsQuery, NewsItem, NewsQuery, QueryKind, NEWS_LIMIT};
use crate::provider::MarketDataProvider;

use models::AlpacaNewsItem;

pub const DEFAULT_BASE_URL: &str = "https://data.paper-api.alpaca.markets";
const PROVIDER_ID: &str = "ALPACA";

const API_KEY_HEADER: &str = "APCA-API-KEY-ID";
const API_SECRET_HEADER: &str = "APCA-API-SECRET-KEY";

/// API key id and secret sent with every upstream request.
#[derive(Clone, PartialEq, Eq)]
pub struct AlpacaCredentials {
    api_key: String,
    api_secret: String,
}

impl AlpacaCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Returns `None` unless both values are present and non-blank.
    pub fn from_parts(api_key: Option<String>, api_secret: Option<String>) -> Option<Self> {
        let api_key = api_key.filter(|v| !v.trim().is_empty())?;
        let api_secret = api_secret.filter(|v| !v.trim().is_empty())?;
        Some(Self::new(api_key, api_secret))
    }
}

impl fmt::Debug for AlpacaCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlpacaCredentials")
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .finish()
    }
}

/// Alpaca provider for crypto bars and news.
///
/// # Example
///
/// ```ignore
/// let credentials = AlpacaCredentials::new("key-id", "secret");
/// let provider = AlpacaProvider::new(Client::new(), DEFAULT_BASE_URL, Some(credentials));
/// let bars = provider.get_bars(&BarsQuery::new("BTC/USDT")).await?;
/// ```
pub struct AlpacaProvider {
    client: Client,
    base_url: String,
    credentials: Option<AlpacaCredentials>,
}

impl AlpacaProvider {
    /// Create a provider. Missing credentials are tolerated here and
    /// reported on every request instead.
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        credentials: Option<AlpacaCredentials>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn credentials(&self) -> Result<&AlpacaCredentials, MarketDataError> {
        self.credentials
            .as_ref()
            .ok_or(MarketDataError::MissingCredentials)
    }

    fn news_url(&self) -> String {
        format!("{}/v1beta1/news", self.base_url)
    }

    fn bars_url(&self, symbol: &str) -> String {
        format!(
            "{}/v2/crypto/{}/bars",
            self.base_url,
            urlencoding::encode(symbol)
        )
    }

    /// Send an authenticated request and decode the body as JSON.
    ///
    /// The body is read exactly once, as bytes. A body that is not JSON
    /// becomes [`MarketDataError::MalformedPayload`], distinct from a
    /// transport failure.
    async fn fetch(
        &self,
        kind: QueryKind,
        request: RequestBuilder,
    ) -> Result<Value, MarketDataError> {
        let credentials = self.credentials()?;

        let response = request
            .header(API_KEY_HEADER, &credentials.api_key)
            .header(API_SECRET_HEADER, &credentials.api_secret)
            .send()
            .await
            .map_err(|e| {
                error!("Alpaca {} request could not be sent: {}", kind, e);
                MarketDataError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Alpaca {} API error ({}): {}", kind, status.as_u16(), body);
            return Err(MarketDataError::UpstreamStatus {
                provider: PROVIDER_ID.to_string(),
                kind,
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            error!(
                "Failed to parse Alpaca {} response as JSON ({}): {}",
                kind,
                e,
                String::from_utf8_lossy(&body)
            );
            MarketDataError::malformed(PROVIDER_ID, kind, &body)
        })
    }
}

/// Removes the array stored under the request kind's key.
fn take_array(mut payload: Value, kind: QueryKind) -> Result<Vec<Value>, MarketDataError> {
    match payload.get_mut(kind.as_str()) {
        Some(Value::Array(items)) => Ok(std::mem::take(items)),
        _ => {
            error!(
                "Alpaca {} response has no '{}' array: {}",
                kind, kind, payload
            );
            Err(unexpected_format(kind))
        }
    }
}

fn unexpected_format(kind: QueryKind) -> MarketDataError {
    MarketDataError::UnexpectedFormat {
        provider: PROVIDER_ID.to_string(),
        kind,
    }
}

#[async_trait]
impl MarketDataProvider for AlpacaProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn ensure_configured(&self) -> Result<(), MarketDataError> {
        self.credentials().map(|_| ())
    }

    async fn get_news(&self, query: &NewsQuery) -> Result<Vec<NewsItem>, MarketDataError> {
        let mut params = vec![
            ("sort", "desc".to_string()),
            ("limit", NEWS_LIMIT.to_string()),
        ];
        if let Some(symbol) = query.upstream_symbol() {
            params.push(("symbols", symbol.to_string()));
        }
        debug!("Fetching Alpaca news with {:?}", params);

        let request = self.client.get(self.news_url()).query(&params);
        let payload = self.fetch(QueryKind::News, request).await?;

        take_array(payload, QueryKind::News)?
            .into_iter()
            .map(|item| {
                serde_json::from_value::<AlpacaNewsItem>(item)
                    .map(NewsItem::from)
                    .map_err(|e| {
                        error!("Alpaca news item has an unexpected shape: {}", e);
                        unexpected_format(QueryKind::News)
                    })
            })
            .collect()
    }

    async fn get_bars(&self, query: &BarsQuery) -> Result<Vec<Bar>, MarketDataError> {
        let url = self.bars_url(query.upstream_symbol());
        debug!(
            "Fetching Alpaca bars from {} (timeframe={}, limit={})",
            url, query.timeframe, query.limit
        );

        let request = self.client.get(url).query(&[
            ("timeframe", query.timeframe.clone()),
            ("limit", query.limit.to_string()),
        ]);
        let payload = self.fetch(QueryKind::Bars, request).await?;
        take_array(payload, QueryKind::Bars)
    }
}
