//! Market data models
//!
//! This module contains the request and response types of the proxy:
//! - `query` - Raw query parameters and their validated form (MarketDataQuery)
//! - `news` - Normalized news items and date formatting
//! - `symbol` - Trading-pair suffix handling
//! - `response` - Response bodies (MarketDataResponse)

mod news;
mod query;
mod response;
mod symbol;

pub use news::{format_news_date, NewsItem, INVALID_DATE};
pub use query::{
    BarsQuery, MarketDataQuery, NewsQuery, QueryKind, QueryParams, DEFAULT_BARS_LIMIT,
    DEFAULT_TIMEFRAME, INVALID_LIMIT_MESSAGE, INVALID_TYPE_MESSAGE, NEWS_LIMIT,
    SYMBOL_REQUIRED_MESSAGE,
};
pub use response::{Bar, MarketDataResponse};
pub use symbol::{strip_quote_suffix, QUOTE_SUFFIX};
