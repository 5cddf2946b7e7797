//! Market metrics - ingestion-side model of the survey table.

mod market;
mod overview;

pub use market::{markets_from_raw_table, MarketMetrics, RawMarketRecord};
pub use overview::FunnelOverview;
