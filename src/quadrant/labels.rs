//! Collision-avoiding label layout for the quadrant scatter.
//!
//! Labels nudge away from the plot center toward their quadrant's outer
//! corner, then a greedy pass resolves collisions through a deterministic
//! candidate ladder. Nothing here depends on specific market names, so the
//! layout works for any market set.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Quadrant;

/// Labels keep this distance from the chart-area edges, in layout units.
const EDGE_MARGIN: f64 = 20.0;
/// Base diagonal offset from a point to its label.
const BASE_OFFSET: f64 = 30.0;
/// Minimum distance between any two label anchors.
const MIN_SEPARATION: f64 = 18.0;
/// Per-index stagger step within a quadrant group.
const STAGGER_STEP: f64 = 10.0;
/// Offset growth per character of label text; longer names sit further out.
const LENGTH_SCALE_PER_CHAR: f64 = 0.05;

/// The drawable plot rectangle, in layout units. `y` grows downward, so
/// `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

/// A scatter point awaiting a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPoint {
    pub market: String,
    pub x: f64,
    pub y: f64,
    pub quadrant: Quadrant,
}

/// Where a market's label should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
}

impl LabelAnchor {
    fn distance_to(&self, other: &LabelAnchor) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Assigns each point a label anchor inside `area` (inset by a fixed
/// margin), keeping anchors at least a minimum separation apart whenever
/// the area admits it.
///
/// Placement is greedy in input order. Each point gets a preferred offset
/// toward its quadrant's outer corner, scaled by label length and staggered
/// by its index within the quadrant group; if that collides with an
/// already-placed anchor, a fixed ladder of alternative offsets is tried.
/// When no candidate clears, the one with the greatest clearance wins, so
/// crowded layouts overlap deterministically rather than failing.
///
/// Market names are the map keys, so the caller must supply unique names,
/// the same uniqueness the classification input already requires.
pub fn place_labels(points: &[LabelPoint], area: &ChartArea) -> BTreeMap<String, LabelAnchor> {
    let mut group_sizes: HashMap<Quadrant, usize> = HashMap::new();
    let mut placed: Vec<LabelAnchor> = Vec::with_capacity(points.len());
    let mut anchors = BTreeMap::new();

    for point in points {
        let counter = group_sizes.entry(point.quadrant).or_insert(0);
        let index = *counter;
        *counter += 1;

        let preferred = preferred_offset(point, index);
        let anchor = resolve_collision(point, preferred, area, &placed);

        placed.push(anchor);
        anchors.insert(point.market.clone(), anchor);
    }

    debug!(labels = anchors.len(), "Placed scatter labels");
    anchors
}

/// Outward unit direction for a quadrant: away from the plot center toward
/// that quadrant's corner. `y` grows downward, so "up" is negative.
fn outward(quadrant: Quadrant) -> (f64, f64) {
    match quadrant {
        Quadrant::Leading => (1.0, -1.0),
        Quadrant::GrowthOpportunity => (-1.0, -1.0),
        Quadrant::Stable => (1.0, 1.0),
        Quadrant::Underperforming => (-1.0, 1.0),
    }
}

fn preferred_offset(point: &LabelPoint, index: usize) -> (f64, f64) {
    let (dir_x, dir_y) = outward(point.quadrant);
    let length_scale = 1.0 + LENGTH_SCALE_PER_CHAR * point.market.chars().count() as f64;

    // Deterministic stagger grid spreads members of the same group.
    let stagger_x = ((index % 5) as f64 - 2.0) * STAGGER_STEP;
    let stagger_y = (((index / 5) % 5) as f64 - 2.0) * STAGGER_STEP;

    (
        dir_x * BASE_OFFSET * length_scale + stagger_x,
        dir_y * BASE_OFFSET * length_scale + stagger_y,
    )
}

/// Fixed ladder of fallback offsets, tried in order: flips, a rotation,
/// stretched versions, then pure vertical/horizontal escapes.
fn candidate_offsets(preferred: (f64, f64)) -> [(f64, f64); 9] {
    let (dx, dy) = preferred;
    [
        (dx, dy),
        (-dx, dy),
        (dx, -dy),
        (-dx, -dy),
        (dy, dx),
        (dx * 1.5, dy * 1.5),
        (dx * 2.0, dy * 2.0),
        (0.0, dy.signum() * (dy.abs() + BASE_OFFSET)),
        (dx.signum() * (dx.abs() + BASE_OFFSET), 0.0),
    ]
}

fn resolve_collision(
    point: &LabelPoint,
    preferred: (f64, f64),
    area: &ChartArea,
    placed: &[LabelAnchor],
) -> LabelAnchor {
    let mut best: Option<(LabelAnchor, f64)> = None;

    for (dx, dy) in candidate_offsets(preferred) {
        let anchor = clamp_into(point.x + dx, point.y + dy, area);
        let clearance = placed
            .iter()
            .map(|other| anchor.distance_to(other))
            .fold(f64::INFINITY, f64::min);

        if clearance >= MIN_SEPARATION {
            return anchor;
        }
        match best {
            Some((_, best_clearance)) if best_clearance >= clearance => {}
            _ => best = Some((anchor, clearance)),
        }
    }

    // Crowded area: accept the least-overlapping candidate.
    best.map(|(anchor, _)| anchor)
        .unwrap_or_else(|| clamp_into(point.x, point.y, area))
}

fn clamp_into(x: f64, y: f64, area: &ChartArea) -> LabelAnchor {
    LabelAnchor {
        x: x.max(area.left + EDGE_MARGIN).min(area.right - EDGE_MARGIN),
        y: y.max(area.top + EDGE_MARGIN).min(area.bottom - EDGE_MARGIN),
    }
}
