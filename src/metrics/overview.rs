//! Aggregate funnel overview across a market set.

use serde::{Deserialize, Serialize};

use crate::foundation::AnalysisError;

use super::MarketMetrics;

/// Per-metric arithmetic means across a market set.
///
/// This is the "overall" headline view: one mean per funnel stage, in
/// percentage points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelOverview {
    pub awareness: f64,
    pub familiarity: f64,
    pub consideration: f64,
    pub intent: f64,
}

impl FunnelOverview {
    /// Computes the overview for a non-empty market set.
    pub fn from_markets(markets: &[MarketMetrics]) -> Result<Self, AnalysisError> {
        if markets.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let n = markets.len() as f64;
        Ok(Self {
            awareness: markets.iter().map(|m| m.awareness.value()).sum::<f64>() / n,
            familiarity: markets.iter().map(|m| m.familiarity.value()).sum::<f64>() / n,
            consideration: markets.iter().map(|m| m.consideration.value()).sum::<f64>() / n,
            intent: markets.iter().map(|m| m.intent.value()).sum::<f64>() / n,
        })
    }
}
