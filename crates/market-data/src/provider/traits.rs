//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Bar, BarsQuery, NewsItem, NewsQuery};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new upstream. Each method
/// makes at most one outbound call and never retries.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fails with [`MarketDataError::MissingCredentials`] when the provider
    /// cannot authenticate. Checked before the request is validated.
    fn ensure_configured(&self) -> Result<(), MarketDataError> {
        Ok(())
    }

    /// Fetch the latest headlines, newest first.
    async fn get_news(&self, query: &NewsQuery) -> Result<Vec<NewsItem>, MarketDataError>;

    /// Fetch bars for one symbol, unmodified.
    async fn get_bars(&self, query: &BarsQuery) -> Result<Vec<Bar>, MarketDataError>;
}
