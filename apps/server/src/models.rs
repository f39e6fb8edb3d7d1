use cryptodash_market_data as market_data;
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

/// Query string of `GET /api/market-data`.
#[derive(IntoParams, Debug, Clone, Default, PartialEq, Eq)]
#[into_params(parameter_in = Query)]
pub struct MarketDataParams {
    /// `news` or `bars`
    #[param(rename = "type")]
    pub kind: Option<String>,
    /// Optional for news, required for bars. A trailing `/USDT` is ignored.
    pub symbol: Option<String>,
    /// Bars only, defaults to `1D`
    pub timeframe: Option<String>,
    /// Bars only, defaults to `100`
    pub limit: Option<String>,
}

impl MarketDataParams {
    /// Builds the params from decoded query pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "type" => &mut params.kind,
                "symbol" => &mut params.symbol,
                "timeframe" => &mut params.timeframe,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

impl From<MarketDataParams> for market_data::QueryParams {
    fn from(p: MarketDataParams) -> Self {
        Self {
            kind: p.kind,
            symbol: p.symbol,
            timeframe: p.timeframe,
            limit: p.limit,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct NewsItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// `dd/mm/yyyy`
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub symbols: Vec<String>,
}

impl From<market_data::NewsItem> for NewsItem {
    fn from(n: market_data::NewsItem) -> Self {
        Self {
            title: n.title,
            source: n.source,
            date: n.date,
            url: n.url,
            symbols: n.symbols,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct NewsResponse {
    pub news: Vec<NewsItem>,
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct BarsResponse {
    /// Upstream OHLCV records, unmodified
    #[schema(value_type = Vec<Object>)]
    pub bars: Vec<serde_json::Value>,
}

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(untagged)]
pub enum MarketDataBody {
    News(NewsResponse),
    Bars(BarsResponse),
}

impl From<market_data::MarketDataResponse> for MarketDataBody {
    fn from(r: market_data::MarketDataResponse) -> Self {
        match r {
            market_data::MarketDataResponse::News { news } => MarketDataBody::News(NewsResponse {
                news: news.into_iter().map(NewsItem::from).collect(),
            }),
            market_data::MarketDataResponse::Bars { bars } => {
                MarketDataBody::Bars(BarsResponse { bars })
            }
        }
    }
}
