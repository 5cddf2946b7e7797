//! Market metrics - one entry per tracked survey market.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::{AnalysisError, Percent, RawMetricField};

/// Brand-funnel metrics for a single market.
///
/// Current-period values are percentages; growth fields are signed
/// year-over-year percentage-point deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketMetrics {
    /// Unique market name (e.g., a country).
    pub name: String,
    pub awareness: Percent,
    pub familiarity: Percent,
    pub consideration: Percent,
    pub intent: Percent,
    pub awareness_growth: f64,
    pub consideration_growth: f64,
    pub intent_growth: f64,
}

/// A market record as delivered by an upstream table, before normalization.
///
/// Every field is optional; absent fields normalize to zero. Values may be
/// numbers or percent-suffixed strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMarketRecord {
    pub awareness: Option<RawMetricField>,
    pub familiarity: Option<RawMetricField>,
    pub consideration: Option<RawMetricField>,
    pub intent: Option<RawMetricField>,
    pub awareness_growth: Option<RawMetricField>,
    pub consideration_growth: Option<RawMetricField>,
    pub intent_growth: Option<RawMetricField>,
}

impl MarketMetrics {
    /// Creates metrics from plain numeric values. Finite percentages clamp
    /// to [0, 100]; non-finite values are kept as-is and rejected when the
    /// market is analyzed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        awareness: f64,
        familiarity: f64,
        consideration: f64,
        intent: f64,
        awareness_growth: f64,
        consideration_growth: f64,
        intent_growth: f64,
    ) -> Self {
        Self {
            name: name.into(),
            awareness: Percent::new(awareness),
            familiarity: Percent::new(familiarity),
            consideration: Percent::new(consideration),
            intent: Percent::new(intent),
            awareness_growth,
            consideration_growth,
            intent_growth,
        }
    }

    /// Normalizes a raw record into validated metrics.
    ///
    /// Absent fields default to zero; present-but-malformed fields are a
    /// hard error. The two cases are deliberately distinct: a survey gap is
    /// expected, a corrupt value is not. A finite percentage outside
    /// [0, 100] is coercible and clamps into range rather than erroring.
    pub fn from_raw(name: impl Into<String>, raw: &RawMarketRecord) -> Result<Self, AnalysisError> {
        let name = name.into();

        let awareness = normalize_percent(&name, "awareness", raw.awareness.as_ref())?;
        let familiarity = normalize_percent(&name, "familiarity", raw.familiarity.as_ref())?;
        let consideration = normalize_percent(&name, "consideration", raw.consideration.as_ref())?;
        let intent = normalize_percent(&name, "intent", raw.intent.as_ref())?;

        let awareness_growth = normalize_delta(&name, "awarenessGrowth", raw.awareness_growth.as_ref())?;
        let consideration_growth =
            normalize_delta(&name, "considerationGrowth", raw.consideration_growth.as_ref())?;
        let intent_growth = normalize_delta(&name, "intentGrowth", raw.intent_growth.as_ref())?;

        Ok(Self {
            name,
            awareness,
            familiarity,
            consideration,
            intent,
            awareness_growth,
            consideration_growth,
            intent_growth,
        })
    }
}

/// Normalizes a whole raw table (market name -> record) into a market list.
///
/// A `BTreeMap` keeps the resulting order deterministic regardless of how
/// the table was produced.
pub fn markets_from_raw_table(
    table: &BTreeMap<String, RawMarketRecord>,
) -> Result<Vec<MarketMetrics>, AnalysisError> {
    table
        .iter()
        .map(|(name, raw)| MarketMetrics::from_raw(name.clone(), raw))
        .collect()
}

fn normalize_percent(
    market: &str,
    field: &'static str,
    raw: Option<&RawMetricField>,
) -> Result<Percent, AnalysisError> {
    match raw {
        None => Ok(Percent::ZERO),
        Some(value) => {
            let numeric = value
                .normalize(field)
                .map_err(|_| AnalysisError::invalid_metric(market, field, value.to_string()))?;
            Ok(Percent::new(numeric))
        }
    }
}

fn normalize_delta(
    market: &str,
    field: &'static str,
    raw: Option<&RawMetricField>,
) -> Result<f64, AnalysisError> {
    match raw {
        None => Ok(0.0),
        Some(value) => value
            .normalize(field)
            .map_err(|_| AnalysisError::invalid_metric(market, field, value.to_string())),
    }
}
