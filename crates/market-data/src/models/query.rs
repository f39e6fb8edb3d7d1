//! Query parameters and their validated form.

use std::fmt;
use std::str::FromStr;

use super::symbol::strip_quote_suffix;
use crate::errors::MarketDataError;

/// Number of headlines requested from the news endpoint.
pub const NEWS_LIMIT: u32 = 10;
/// Bar timeframe used when the caller does not pass one.
pub const DEFAULT_TIMEFRAME: &str = "1D";
/// Bar count used when the caller does not pass one.
pub const DEFAULT_BARS_LIMIT: u32 = 100;

pub const INVALID_TYPE_MESSAGE: &str = "invalid API type specified.";
pub const SYMBOL_REQUIRED_MESSAGE: &str = "symbol is required for bars.";
pub const INVALID_LIMIT_MESSAGE: &str = "limit must be a positive integer.";

/// The two request kinds the proxy understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    News,
    Bars,
}

impl QueryKind {
    /// Wire name, also the key of the array in upstream and proxy bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Bars => "bars",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "news" => Ok(Self::News),
            "bars" => Ok(Self::Bars),
            _ => Err(MarketDataError::InvalidRequest(
                INVALID_TYPE_MESSAGE.to_string(),
            )),
        }
    }
}

/// Raw query string of a proxy request. Nothing here is trusted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// The `type` parameter
    pub kind: Option<String>,
    pub symbol: Option<String>,
    pub timeframe: Option<String>,
    pub limit: Option<String>,
}

/// Latest headlines, optionally filtered to one symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsQuery {
    pub symbol: Option<String>,
}

impl NewsQuery {
    /// Symbol as the upstream expects it, without the pair suffix.
    pub fn upstream_symbol(&self) -> Option<&str> {
        self.symbol.as_deref().map(strip_quote_suffix)
    }
}

/// Aggregated bars for one crypto symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarsQuery {
    pub symbol: String,
    pub timeframe: String,
    pub limit: u32,
}

impl BarsQuery {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe: DEFAULT_TIMEFRAME.to_string(),
            limit: DEFAULT_BARS_LIMIT,
        }
    }

    pub fn upstream_symbol(&self) -> &str {
        strip_quote_suffix(&self.symbol)
    }
}

/// A validated proxy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketDataQuery {
    News(NewsQuery),
    Bars(BarsQuery),
}

impl MarketDataQuery {
    /// Validates raw parameters.
    ///
    /// Empty values count as absent: the dashboard sends `symbol=` when no
    /// coin is selected.
    pub fn from_params(params: &QueryParams) -> Result<Self, MarketDataError> {
        let kind: QueryKind = non_empty(&params.kind)
            .ok_or_else(|| MarketDataError::InvalidRequest(INVALID_TYPE_MESSAGE.to_string()))?
            .parse()?;
        let symbol = non_empty(&params.symbol).map(str::to_string);

        match kind {
            QueryKind::News => Ok(Self::News(NewsQuery { symbol })),
            QueryKind::Bars => {
                let symbol = symbol.ok_or_else(|| {
                    MarketDataError::InvalidRequest(SYMBOL_REQUIRED_MESSAGE.to_string())
                })?;
                let timeframe = non_empty(&params.timeframe)
                    .unwrap_or(DEFAULT_TIMEFRAME)
                    .to_string();
                let limit = match non_empty(&params.limit) {
                    Some(raw) => parse_limit(raw)?,
                    None => DEFAULT_BARS_LIMIT,
                };
                Ok(Self::Bars(BarsQuery {
                    symbol,
                    timeframe,
                    limit,
                }))
            }
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            Self::News(_) => QueryKind::News,
            Self::Bars(_) => QueryKind::Bars,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_limit(raw: &str) -> Result<u32, MarketDataError> {
    match raw.trim().parse::<u32>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(MarketDataError::InvalidRequest(
            INVALID_LIMIT_MESSAGE.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(kind: Option<&str>, symbol: Option<&str>) -> QueryParams {
        QueryParams {
            kind: kind.map(String::from),
            symbol: symbol.map(String::from),
            ..Default::default()
        }
    }

    fn invalid_message(result: Result<MarketDataQuery, MarketDataError>) -> String {
        match result {
            Err(MarketDataError::InvalidRequest(message)) => message,
            other => panic!("expected invalid request, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        for kind in ["quotes", "NEWS", "bar", " news"] {
            let message = invalid_message(MarketDataQuery::from_params(&params(Some(kind), None)));
            assert_eq!(message, INVALID_TYPE_MESSAGE);
        }
    }

    #[test]
    fn test_missing_or_empty_type_is_rejected() {
        assert_eq!(
            invalid_message(MarketDataQuery::from_params(&params(None, Some("BTC")))),
            INVALID_TYPE_MESSAGE
        );
        assert_eq!(
            invalid_message(MarketDataQuery::from_params(&params(Some(""), None))),
            INVALID_TYPE_MESSAGE
        );
    }

    #[test]
    fn test_news_symbol_is_optional() {
        let query = MarketDataQuery::from_params(&params(Some("news"), None)).unwrap();
        assert_eq!(query, MarketDataQuery::News(NewsQuery { symbol: None }));
    }

    #[test]
    fn test_news_empty_symbol_counts_as_absent() {
        let query = MarketDataQuery::from_params(&params(Some("news"), Some(""))).unwrap();
        assert_eq!(query, MarketDataQuery::News(NewsQuery { symbol: None }));
    }

    #[test]
    fn test_news_upstream_symbol_drops_pair_suffix() {
        let query = NewsQuery {
            symbol: Some("ETH/USDT".to_string()),
        };
        assert_eq!(query.upstream_symbol(), Some("ETH"));
    }

    #[test]
    fn test_bars_requires_symbol() {
        assert_eq!(
            invalid_message(MarketDataQuery::from_params(&params(Some("bars"), None))),
            SYMBOL_REQUIRED_MESSAGE
        );
        assert_eq!(
            invalid_message(MarketDataQuery::from_params(&params(Some("bars"), Some("")))),
            SYMBOL_REQUIRED_MESSAGE
        );
    }

    #[test]
    fn test_bars_defaults() {
        let query = MarketDataQuery::from_params(&params(Some("bars"), Some("BTC/USDT"))).unwrap();
        let MarketDataQuery::Bars(bars) = query else {
            panic!("expected bars query");
        };
        assert_eq!(bars.symbol, "BTC/USDT");
        assert_eq!(bars.upstream_symbol(), "BTC");
        assert_eq!(bars.timeframe, "1D");
        assert_eq!(bars.limit, 100);
    }

    #[test]
    fn test_bars_explicit_timeframe_and_limit() {
        let raw = QueryParams {
            kind: Some("bars".to_string()),
            symbol: Some("SOL".to_string()),
            timeframe: Some("1H".to_string()),
            limit: Some("24".to_string()),
        };
        let query = MarketDataQuery::from_params(&raw).unwrap();
        assert_eq!(
            query,
            MarketDataQuery::Bars(BarsQuery {
                symbol: "SOL".to_string(),
                timeframe: "1H".to_string(),
                limit: 24,
            })
        );
        assert_eq!(query.kind(), QueryKind::Bars);
    }

    #[test]
    fn test_bars_rejects_bad_limit() {
        for limit in ["abc", "0", "-5", "1.5"] {
            let raw = QueryParams {
                kind: Some("bars".to_string()),
                symbol: Some("BTC".to_string()),
                limit: Some(limit.to_string()),
                ..Default::default()
            };
            assert_eq!(
                invalid_message(MarketDataQuery::from_params(&raw)),
                INVALID_LIMIT_MESSAGE
            );
        }
    }

    #[test]
    fn test_query_kind_round_trips_through_display() {
        for kind in [QueryKind::News, QueryKind::Bars] {
            assert_eq!(kind.to_string().parse::<QueryKind>().unwrap(), kind);
        }
    }
}
