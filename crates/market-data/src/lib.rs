//! Cryptodash Market Data Crate
//!
//! This crate proxies the dashboard's market data requests to an upstream
//! provider and reshapes the provider's JSON into stable response types.
//!
//! # Overview
//!
//! Two request kinds are supported:
//! - `news` - the latest headlines, optionally filtered by symbol
//! - `bars` - OHLCV aggregates for one crypto symbol, passed through as-is
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   QueryParams    | --> | MarketDataQuery  |  (validated request)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | MarketDataService|  (credentials + dispatch)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (Alpaca)
//!                          +------------------+
//!                                  |
//!                                  v
//!                        +--------------------+
//!                        | MarketDataResponse |  (news items or raw bars)
//!                        +--------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QueryParams`] - Raw, untrusted query parameters
//! - [`MarketDataQuery`] - A validated [`NewsQuery`] or [`BarsQuery`]
//! - [`NewsItem`] - Normalized headline record
//! - [`MarketDataResponse`] - Body returned to the dashboard
//! - [`MarketDataError`] - Every failure the proxy can surface

pub mod errors;
pub mod models;
pub mod provider;
mod service;

pub use errors::MarketDataError;

pub use models::{
    format_news_date, strip_quote_suffix, Bar, BarsQuery, MarketDataQuery, MarketDataResponse,
    NewsItem, NewsQuery, QueryKind, QueryParams, DEFAULT_BARS_LIMIT, DEFAULT_TIMEFRAME,
    INVALID_LIMIT_MESSAGE, INVALID_TYPE_MESSAGE, NEWS_LIMIT, SYMBOL_REQUIRED_MESSAGE,
};

pub use provider::alpaca::{AlpacaCredentials, AlpacaProvider, DEFAULT_BASE_URL};
pub use provider::MarketDataProvider;

pub use service::MarketDataService;
