//! Dynamic axis scaling for the quadrant scatter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ScoredMarket;

/// Padding around the observed performance range, in percentage points.
const PERFORMANCE_PADDING: f64 = 5.0;
/// Padding around the observed growth range, in percentage points.
const GROWTH_PADDING: f64 = 0.5;

/// Performance axis domain: a percentage can never leave [0, 100].
const PERFORMANCE_DOMAIN: (f64, f64) = (0.0, 100.0);
/// Growth axis domain: the plausible survey-delta range.
const GROWTH_DOMAIN: (f64, f64) = (-2.0, 10.0);

/// An axis interval; `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Axis intervals for both scatter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRanges {
    pub performance: AxisRange,
    pub growth: AxisRange,
}

/// Computes padded, domain-clamped axis ranges for a scored set.
///
/// Fixed padding keeps extreme points away from the plot edges; the domain
/// clamps keep the axes sensible (no negative performance, no growth beyond
/// the plausible delta range). Bounds are rounded to one decimal place. An
/// empty set falls back to the full domains.
pub fn compute_axis_ranges(scored: &[ScoredMarket]) -> AxisRanges {
    if scored.is_empty() {
        return AxisRanges {
            performance: AxisRange {
                min: PERFORMANCE_DOMAIN.0,
                max: PERFORMANCE_DOMAIN.1,
            },
            growth: AxisRange {
                min: GROWTH_DOMAIN.0,
                max: GROWTH_DOMAIN.1,
            },
        };
    }

    let performance = padded_range(
        scored.iter().map(|s| s.performance),
        PERFORMANCE_PADDING,
        PERFORMANCE_DOMAIN,
    );
    let growth = padded_range(scored.iter().map(|s| s.growth), GROWTH_PADDING, GROWTH_DOMAIN);

    debug!(
        performance_min = performance.min,
        performance_max = performance.max,
        growth_min = growth.min,
        growth_max = growth.max,
        "Computed dynamic axis ranges"
    );

    AxisRanges { performance, growth }
}

fn padded_range(values: impl Iterator<Item = f64>, padding: f64, domain: (f64, f64)) -> AxisRange {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    let mut min = round1((lo - padding).max(domain.0).min(domain.1));
    let max = round1((hi + padding).min(domain.1).max(domain.0));

    // Data entirely outside the domain can invert the padded bounds; the
    // min <= max guarantee wins over padding there.
    if min > max {
        min = max;
    }

    AxisRange { min, max }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
