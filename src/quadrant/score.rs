//! Composite performance and growth scoring.

use serde::{Deserialize, Serialize};

use crate::foundation::AnalysisError;
use crate::metrics::MarketMetrics;

use super::Quadrant;

/// Weighting of the funnel metrics into the two composite scores.
///
/// The default weights all metrics equally, matching the established
/// reporting convention. Equal weighting is a modeling choice, not a
/// measured optimum; callers with a better-calibrated model can supply
/// their own positive weights. Weights are normalized by their sum, so
/// only the ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub awareness: f64,
    pub consideration: f64,
    pub intent: f64,
    pub awareness_growth: f64,
    pub consideration_growth: f64,
    pub intent_growth: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            awareness: 1.0,
            consideration: 1.0,
            intent: 1.0,
            awareness_growth: 1.0,
            consideration_growth: 1.0,
            intent_growth: 1.0,
        }
    }
}

impl ScoreWeights {
    /// Checks that both weight triples can produce finite scores.
    ///
    /// Every weight must be a finite non-negative number and each triple
    /// must have a positive sum; a zero-sum triple would turn the weighted
    /// mean into a NaN score.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let named = [
            ("awareness", self.awareness),
            ("consideration", self.consideration),
            ("intent", self.intent),
            ("awareness_growth", self.awareness_growth),
            ("consideration_growth", self.consideration_growth),
            ("intent_growth", self.intent_growth),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AnalysisError::invalid_weights(format!(
                    "weight '{name}' must be a finite non-negative number, got {weight}"
                )));
            }
        }

        if self.awareness + self.consideration + self.intent <= 0.0 {
            return Err(AnalysisError::invalid_weights(
                "performance weights must have a positive sum",
            ));
        }
        if self.awareness_growth + self.consideration_growth + self.intent_growth <= 0.0 {
            return Err(AnalysisError::invalid_weights(
                "growth weights must have a positive sum",
            ));
        }
        Ok(())
    }

    /// Composite current-period performance for one market.
    ///
    /// Weighted mean of awareness, consideration, and intent; in [0, 100]
    /// for any positive weights.
    pub fn performance_score(&self, market: &MarketMetrics) -> f64 {
        let total = self.awareness + self.consideration + self.intent;
        (self.awareness * market.awareness.value()
            + self.consideration * market.consideration.value()
            + self.intent * market.intent.value())
            / total
    }

    /// Composite year-over-year growth for one market.
    ///
    /// Weighted mean of the three growth deltas; unbounded, typically
    /// single-digit percentage points.
    pub fn growth_score(&self, market: &MarketMetrics) -> f64 {
        let total = self.awareness_growth + self.consideration_growth + self.intent_growth;
        (self.awareness_growth * market.awareness_growth
            + self.consideration_growth * market.consideration_growth
            + self.intent_growth * market.intent_growth)
            / total
    }
}

/// A market reduced to its two composite scores.
///
/// Pure derivation from [`MarketMetrics`]; recomputed fresh on every
/// classification, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMarket {
    pub market: String,
    pub performance: f64,
    pub growth: f64,
}

impl ScoredMarket {
    /// The quadrant this market falls into relative to the given midpoints.
    pub fn quadrant(&self, midpoints: &Midpoints) -> Quadrant {
        Quadrant::from_scores(self.performance, self.growth, midpoints)
    }
}

/// Classification thresholds for the current market set.
///
/// Arithmetic population means of the per-market scores, not fixed business
/// thresholds: they shift whenever the input set changes, which can move
/// quadrant membership even when no individual market changed. Mean rather
/// than median, so outliers pull the boundary by design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Midpoints {
    pub performance: f64,
    pub growth: f64,
}

impl Midpoints {
    /// Computes the midpoints of a non-empty scored set.
    pub(crate) fn from_scored(scored: &[ScoredMarket]) -> Self {
        let n = scored.len() as f64;
        Self {
            performance: scored.iter().map(|s| s.performance).sum::<f64>() / n,
            growth: scored.iter().map(|s| s.growth).sum::<f64>() / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(awareness: f64, consideration: f64, intent: f64) -> MarketMetrics {
        MarketMetrics::new("X", awareness, 0.0, consideration, intent, 3.0, 6.0, 9.0)
    }

    #[test]
    fn default_weights_give_unweighted_mean() {
        let weights = ScoreWeights::default();
        let m = market(30.0, 60.0, 90.0);
        assert!((weights.performance_score(&m) - 60.0).abs() < 1e-9);
        assert!((weights.growth_score(&m) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn weights_are_normalized_by_their_sum() {
        let doubled = ScoreWeights {
            awareness: 2.0,
            consideration: 2.0,
            intent: 2.0,
            ..ScoreWeights::default()
        };
        let m = market(30.0, 60.0, 90.0);
        // Scaling every weight leaves the score unchanged.
        assert!((doubled.performance_score(&m) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn skewed_weights_shift_the_score() {
        let awareness_only = ScoreWeights {
            awareness: 1.0,
            consideration: 0.0,
            intent: 0.0,
            ..ScoreWeights::default()
        };
        let m = market(30.0, 60.0, 90.0);
        assert!((awareness_only.performance_score(&m) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn default_weights_validate() {
        assert!(ScoreWeights::default().validate().is_ok());
    }

    #[test]
    fn zero_sum_growth_weights_fail_validation() {
        let weights = ScoreWeights {
            awareness_growth: 0.0,
            consideration_growth: 0.0,
            intent_growth: 0.0,
            ..ScoreWeights::default()
        };
        match weights.validate() {
            Err(AnalysisError::InvalidWeights { reason }) => {
                assert!(reason.contains("growth weights"));
            }
            other => panic!("Expected InvalidWeights, got {:?}", other),
        }
    }

    #[test]
    fn negative_weight_fails_validation() {
        let weights = ScoreWeights {
            intent: -1.0,
            ..ScoreWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn nan_weight_fails_validation() {
        let weights = ScoreWeights {
            awareness: f64::NAN,
            ..ScoreWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn midpoints_are_population_means() {
        let scored = vec![
            ScoredMarket { market: "A".into(), performance: 80.0, growth: 5.0 },
            ScoredMarket { market: "B".into(), performance: 20.0, growth: 1.0 },
        ];
        let midpoints = Midpoints::from_scored(&scored);
        assert!((midpoints.performance - 50.0).abs() < 1e-9);
        assert!((midpoints.growth - 3.0).abs() < 1e-9);
    }
}
