//! Mean-based quadrant classification of a market set.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::AnalysisError;
use crate::metrics::MarketMetrics;

use super::{LabelPoint, Midpoints, Quadrant, ScoreWeights, ScoredMarket};

/// Classifies markets into strategic quadrants.
///
/// A pure computation pipeline: scores each market, derives midpoints from
/// the set's means, and partitions the set. Holds only its weight
/// configuration; every call recomputes from scratch, so identical input
/// always yields identical output.
#[derive(Debug, Clone, Default)]
pub struct QuadrantAnalyzer {
    weights: ScoreWeights,
}

/// The members of one quadrant, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantGroup {
    pub quadrant: Quadrant,
    pub members: Vec<String>,
}

/// Result of classifying a market set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Composite scores, in input order.
    pub scored: Vec<ScoredMarket>,
    /// The set's mean-based classification thresholds.
    pub midpoints: Midpoints,
    /// Exactly four groups in [`Quadrant::ALL`] order; together they
    /// partition the input markets.
    pub quadrants: Vec<QuadrantGroup>,
}

impl QuadrantAnalyzer {
    /// Creates an analyzer with equal metric weighting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom weights.
    ///
    /// Only the ratios within a triple matter. The weights are validated on
    /// every [`classify`](Self::classify) call; a triple that cannot produce
    /// finite scores fails the call with [`AnalysisError::InvalidWeights`].
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Returns the configured weights.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Scores and classifies every market against the set's own means.
    ///
    /// All-or-nothing: an empty set or any non-finite metric fails the whole
    /// call with no partial result.
    pub fn classify(&self, markets: &[MarketMetrics]) -> Result<Classification, AnalysisError> {
        if markets.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        self.weights.validate()?;

        for market in markets {
            validate_finite(market)?;
        }

        let scored: Vec<ScoredMarket> = markets
            .iter()
            .map(|market| ScoredMarket {
                market: market.name.clone(),
                performance: self.weights.performance_score(market),
                growth: self.weights.growth_score(market),
            })
            .collect();

        let midpoints = Midpoints::from_scored(&scored);
        debug!(
            markets = scored.len(),
            performance_midpoint = midpoints.performance,
            growth_midpoint = midpoints.growth,
            "Computed mean-based midpoints"
        );

        let quadrants: Vec<QuadrantGroup> = Quadrant::ALL
            .iter()
            .map(|&quadrant| QuadrantGroup {
                quadrant,
                members: scored
                    .iter()
                    .filter(|entry| entry.quadrant(&midpoints) == quadrant)
                    .map(|entry| entry.market.clone())
                    .collect(),
            })
            .collect();

        for group in &quadrants {
            debug!(
                quadrant = %group.quadrant,
                members = group.members.len(),
                "Classified quadrant"
            );
        }

        Ok(Classification {
            scored,
            midpoints,
            quadrants,
        })
    }
}

impl Classification {
    /// The members of a quadrant, in input order.
    pub fn members_of(&self, quadrant: Quadrant) -> &[String] {
        self.quadrants
            .iter()
            .find(|g| g.quadrant == quadrant)
            .map(|g| g.members.as_slice())
            .unwrap_or(&[])
    }

    /// The quadrant a market landed in, if it was part of the input.
    pub fn quadrant_of(&self, market: &str) -> Option<Quadrant> {
        self.scored
            .iter()
            .find(|s| s.market == market)
            .map(|s| s.quadrant(&self.midpoints))
    }

    /// Scatter points for label layout: performance on x, growth on y.
    pub fn label_points(&self) -> Vec<LabelPoint> {
        self.scored
            .iter()
            .map(|s| LabelPoint {
                market: s.market.clone(),
                x: s.performance,
                y: s.growth,
                quadrant: s.quadrant(&self.midpoints),
            })
            .collect()
    }
}

fn validate_finite(market: &MarketMetrics) -> Result<(), AnalysisError> {
    let fields: [(&'static str, f64); 6] = [
        ("awareness", market.awareness.value()),
        ("consideration", market.consideration.value()),
        ("intent", market.intent.value()),
        ("awarenessGrowth", market.awareness_growth),
        ("considerationGrowth", market.consideration_growth),
        ("intentGrowth", market.intent_growth),
    ];

    for (field, value) in fields {
        if !value.is_finite() {
            return Err(AnalysisError::invalid_metric(
                market.name.clone(),
                field,
                value.to_string(),
            ));
        }
    }
    Ok(())
}
