//! Alpaca data API response models.
//!
//! Only the news item is typed. Bars are forwarded untouched, so they stay
//! as raw JSON values.

use serde::Deserialize;

use crate::models::{format_news_date, NewsItem};

/// One entry of the `news` array returned by `/v1beta1/news`.
#[derive(Debug, Deserialize)]
pub struct AlpacaNewsItem {
    pub headline: Option<String>,
    pub source: Option<String>,
    pub created_at: Option<String>,
    pub url: Option<String>,
    // Alpaca sends `null` for some wire stories
    #[serde(default)]
    pub symbols: Option<Vec<String>>,
}

impl From<AlpacaNewsItem> for NewsItem {
    fn from(item: AlpacaNewsItem) -> Self {
        Self {
            title: item.headline,
            source: item.source,
            date: format_news_date(item.created_at.as_deref()),
            url: item.url,
            symbols: item.symbols.unwrap_or_default(),
        }
    }
}
