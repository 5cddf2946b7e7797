//! Built-in Q1 2025 sample dataset: the fifteen T2 survey markets.
//!
//! Useful for demos and integration tests; production callers supply their
//! own [`MarketMetrics`] table.

use once_cell::sync::Lazy;

use crate::metrics::MarketMetrics;

/// Reporting period the sample values were surveyed in.
pub const SAMPLE_PERIOD: &str = "Q1 2025";

static SAMPLE_MARKETS: Lazy<Vec<MarketMetrics>> = Lazy::new(|| {
    vec![
        MarketMetrics::new("Armenia", 41.0, 24.1, 20.5, 13.1, 7.5, 5.6, 0.9),
        MarketMetrics::new("Belgium", 66.0, 62.9, 25.5, 12.4, 2.5, 3.9, 1.1),
        MarketMetrics::new("Bahrain", 93.6, 59.7, 49.9, 31.6, 2.7, 5.0, 5.9),
        MarketMetrics::new("Canada", 30.3, 22.4, 15.6, 7.5, 8.4, 2.6, 1.8),
        MarketMetrics::new("Netherlands", 63.7, 40.5, 31.3, 16.0, 6.6, 6.1, 3.3),
        MarketMetrics::new("Spain", 51.0, 44.2, 24.1, 8.1, 6.0, 5.3, 3.5),
        MarketMetrics::new("South Korea", 27.6, 30.0, 18.9, 6.7, 2.6, 4.9, 0.8),
        MarketMetrics::new("Egypt", 78.9, 56.3, 26.9, 16.3, 4.7, 3.2, 1.5),
        MarketMetrics::new("Kazakhstan", 35.5, 27.8, 16.3, 9.3, 9.1, 4.6, 3.1),
        MarketMetrics::new("Oman", 91.5, 69.5, 55.1, 37.1, 2.8, 7.6, 0.5),
        MarketMetrics::new("Japan", 38.2, 9.9, 15.5, 8.5, 0.0, 0.0, 0.0),
        MarketMetrics::new("Poland", 61.3, 30.6, 28.0, 11.7, 5.5, 5.7, 3.2),
        MarketMetrics::new("Qatar", 87.8, 55.3, 44.5, 23.7, 3.3, 4.5, 4.3),
        MarketMetrics::new("Romania", 68.4, 27.9, 19.5, 6.8, 4.2, 2.9, 1.5),
        MarketMetrics::new("Uzbekistan", 44.6, 26.6, 21.1, 10.3, 5.6, 5.6, 4.6),
    ]
});

/// Returns the sample market table.
pub fn sample_markets() -> &'static [MarketMetrics] {
    &SAMPLE_MARKETS
}
