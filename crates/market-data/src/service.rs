use std::sync::Arc;

use log::debug;

use crate::errors::MarketDataError;
use crate::models::{MarketDataQuery, MarketDataResponse, QueryParams};
use crate::provider::MarketDataProvider;

/// Serves proxy requests against one provider.
///
/// Stateless apart from the provider handle; cloning is cheap and every
/// request is independent.
#[derive(Clone)]
pub struct MarketDataService {
    provider: Arc<dyn MarketDataProvider>,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    /// Checks credentials, validates `params`, then makes the single
    /// upstream call.
    ///
    /// Credentials are checked first, so an unconfigured proxy answers every
    /// request with [`MarketDataError::MissingCredentials`].
    pub async fn handle(
        &self,
        params: &QueryParams,
    ) -> Result<MarketDataResponse, MarketDataError> {
        self.provider.ensure_configured()?;
        let query = MarketDataQuery::from_params(params)?;
        self.execute(&query).await
    }

    pub async fn execute(
        &self,
        query: &MarketDataQuery,
    ) -> Result<MarketDataResponse, MarketDataError> {
        debug!("Serving {:?} via {}", query, self.provider.id());
        match query {
            MarketDataQuery::News(news_query) => {
                let news = self.provider.get_news(news_query).await?;
                Ok(MarketDataResponse::News { news })
            }
            MarketDataQuery::Bars(bars_query) => {
                let bars = self.provider.get_bars(bars_query).await?;
                Ok(MarketDataResponse::Bars { bars })
            }
        }
    }
}
