//! Quadrant analytics - scoring, classification, axis scaling, and label
//! layout for the market scatter.

mod analyzer;
mod axis;
mod labels;
mod quadrant;
mod score;

pub use analyzer::{Classification, QuadrantAnalyzer, QuadrantGroup};
pub use axis::{compute_axis_ranges, AxisRange, AxisRanges};
pub use labels::{place_labels, ChartArea, LabelAnchor, LabelPoint};
pub use quadrant::Quadrant;
pub use score::{Midpoints, ScoreWeights, ScoredMarket};
