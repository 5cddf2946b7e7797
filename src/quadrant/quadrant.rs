//! Strategic quadrant classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Midpoints;

/// One of the four strategic quadrants, relative to the set's midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Performance and growth both at or above the midpoints.
    Leading,
    /// Below-midpoint performance with at-or-above-midpoint growth.
    GrowthOpportunity,
    /// At-or-above-midpoint performance with below-midpoint growth.
    Stable,
    /// Below the midpoint on both axes.
    Underperforming,
}

impl Quadrant {
    /// All quadrants, in reporting order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Leading,
        Quadrant::GrowthOpportunity,
        Quadrant::Stable,
        Quadrant::Underperforming,
    ];

    /// Classifies a performance/growth pair against the midpoints.
    ///
    /// A value exactly equal to its midpoint counts as "at or above", so
    /// ties resolve toward the higher classification.
    pub fn from_scores(performance: f64, growth: f64, midpoints: &Midpoints) -> Self {
        let high_performance = performance >= midpoints.performance;
        let high_growth = growth >= midpoints.growth;

        match (high_performance, high_growth) {
            (true, true) => Quadrant::Leading,
            (false, true) => Quadrant::GrowthOpportunity,
            (true, false) => Quadrant::Stable,
            (false, false) => Quadrant::Underperforming,
        }
    }

    /// Portfolio-matrix alias for this quadrant.
    pub fn alias(&self) -> &'static str {
        match self {
            Quadrant::Leading => "Stars",
            Quadrant::GrowthOpportunity => "Question Marks",
            Quadrant::Stable => "Cash Cows",
            Quadrant::Underperforming => "Dogs",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quadrant::Leading => "Leading Market",
            Quadrant::GrowthOpportunity => "Growth Opportunity",
            Quadrant::Stable => "Stable Performer",
            Quadrant::Underperforming => "Underperforming Market",
        };
        write!(f, "{name}")
    }
}
