/// Trading-pair suffix the dashboard appends to crypto symbols.
pub const QUOTE_SUFFIX: &str = "/USDT";

/// Strips a trailing `/USDT` so the upstream sees the base asset.
///
/// `"BTC/USDT"` becomes `"BTC"`; any other symbol is returned unchanged.
pub fn strip_quote_suffix(symbol: &str) -> &str {
    symbol.strip_suffix(QUOTE_SUFFIX).unwrap_or(symbol)
}
