//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Alpaca provider, the upstream the dashboard proxies to
//!
//! Providers receive validated queries and return normalized data. They own
//! everything upstream-specific: URLs, credential headers, payload shapes.

mod traits;

pub mod alpaca;

// Re-exports
pub use traits::MarketDataProvider;
