use serde::Serialize;
use serde_json::Value;

use super::news::NewsItem;

/// One OHLCV record, exactly as the upstream sent it.
pub type Bar = Value;

/// Body of a successful proxy response: `{"news": [...]}` or `{"bars": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarketDataResponse {
    News { news: Vec<NewsItem> },
    Bars { bars: Vec<Bar> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_news_body_shape() {
        let response = MarketDataResponse::News {
            news: vec![NewsItem {
                title: Some("H".to_string()),
                source: Some("S".to_string()),
                date: "02/01/2024".to_string(),
                url: Some("u".to_string()),
                symbols: vec!["BTC".to_string()],
            }],
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"news":[{"title":"H","source":"S","date":"02/01/2024","url":"u","symbols":["BTC"]}]}"#
        );
    }

    #[test]
    fn test_bars_body_keeps_upstream_key_order() {
        let bar: Bar = serde_json::from_str(r#"{"t":"2024-01-02T00:00:00Z","o":1.5,"h":2,"l":1,"c":1.75,"v":10}"#)
            .unwrap();
        let response = MarketDataResponse::Bars { bars: vec![bar] };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"bars":[{"t":"2024-01-02T00:00:00Z","o":1.5,"h":2,"l":1,"c":1.75,"v":10}]}"#
        );
    }

    #[test]
    fn test_empty_bars() {
        let response = MarketDataResponse::Bars { bars: vec![] };
        assert_eq!(serde_json::to_value(&response).unwrap(), json!({ "bars": [] }));
    }
}
