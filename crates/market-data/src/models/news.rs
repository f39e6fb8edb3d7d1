use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Rendered in place of a date the upstream sent in an unreadable form.
pub const INVALID_DATE: &str = "Invalid Date";

/// A headline in the dashboard's schema, decoupled from upstream field names.
///
/// Absent text fields are omitted from the serialized form, never `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Creation date as `dd/mm/yyyy` (UTC).
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub symbols: Vec<String>,
}

/// Formats an upstream creation timestamp the way the dashboard shows it
/// (pt-BR day/month/year ordering).
///
/// Accepts RFC 3339 timestamps and bare `yyyy-mm-dd` dates; both are read
/// as UTC.
pub fn format_news_date(created_at: Option<&str>) -> String {
    let Some(raw) = created_at.map(str::trim) else {
        return INVALID_DATE.to_string();
    };

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc).date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}
