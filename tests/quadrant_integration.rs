//! End-to-end pipeline tests over the built-in sample dataset.

use market_compass::dataset::sample_markets;
use market_compass::metrics::FunnelOverview;
use market_compass::quadrant::{
    compute_axis_ranges, place_labels, ChartArea, Quadrant, QuadrantAnalyzer,
};

#[test]
fn sample_dataset_classifies_into_expected_quadrants() {
    let result = QuadrantAnalyzer::new().classify(sample_markets()).unwrap();

    assert_eq!(
        result.members_of(Quadrant::Leading),
        ["Bahrain", "Netherlands", "Poland", "Qatar"]
    );
    assert_eq!(
        result.members_of(Quadrant::GrowthOpportunity),
        ["Armenia", "Canada", "Spain", "Kazakhstan", "Uzbekistan"]
    );
    assert_eq!(
        result.members_of(Quadrant::Stable),
        ["Belgium", "Egypt", "Oman"]
    );
    assert_eq!(
        result.members_of(Quadrant::Underperforming),
        ["South Korea", "Japan", "Romania"]
    );
}

#[test]
fn sample_dataset_midpoints_are_the_population_means() {
    let result = QuadrantAnalyzer::new().classify(sample_markets()).unwrap();

    let n = result.scored.len() as f64;
    let mean_performance = result.scored.iter().map(|s| s.performance).sum::<f64>() / n;
    let mean_growth = result.scored.iter().map(|s| s.growth).sum::<f64>() / n;

    assert!((result.midpoints.performance - mean_performance).abs() < 1e-9);
    assert!((result.midpoints.growth - mean_growth).abs() < 1e-9);
    // Known values for the Q1 2025 table.
    assert!((result.midpoints.performance - 33.582).abs() < 0.001);
    assert!((result.midpoints.growth - 3.889).abs() < 0.001);
}

#[test]
fn sample_dataset_partition_covers_every_market() {
    let result = QuadrantAnalyzer::new().classify(sample_markets()).unwrap();

    let mut classified: Vec<&str> = result
        .quadrants
        .iter()
        .flat_map(|g| g.members.iter().map(String::as_str))
        .collect();
    assert_eq!(classified.len(), sample_markets().len());

    classified.sort_unstable();
    classified.dedup();
    assert_eq!(classified.len(), sample_markets().len());
}

#[test]
fn sample_dataset_axis_ranges_pad_and_clamp() {
    let result = QuadrantAnalyzer::new().classify(sample_markets()).unwrap();
    let ranges = compute_axis_ranges(&result.scored);

    // Lowest performer is South Korea at ~17.73, highest Oman at ~61.23.
    assert!((ranges.performance.min - 12.7).abs() < 1e-9);
    assert!((ranges.performance.max - 66.2).abs() < 1e-9);
    // Japan's flat growth floors the axis at -0.5; Kazakhstan tops it at 5.6.
    assert!((ranges.growth.min - -0.5).abs() < 1e-9);
    assert!((ranges.growth.max - 6.1).abs() < 1e-9);
    assert!(ranges.performance.min <= ranges.performance.max);
    assert!(ranges.growth.min <= ranges.growth.max);
}

#[test]
fn sample_dataset_labels_fit_the_chart_area() {
    let result = QuadrantAnalyzer::new().classify(sample_markets()).unwrap();
    let area = ChartArea {
        top: 0.0,
        left: 0.0,
        right: 900.0,
        bottom: 600.0,
    };

    // Project scores into layout units the way a chart scale would.
    let ranges = compute_axis_ranges(&result.scored);
    let points: Vec<_> = result
        .label_points()
        .into_iter()
        .map(|mut p| {
            p.x = (p.x - ranges.performance.min)
                / (ranges.performance.max - ranges.performance.min)
                * (area.right - area.left);
            p.y = (ranges.growth.max - p.y) / (ranges.growth.max - ranges.growth.min)
                * (area.bottom - area.top);
            p
        })
        .collect();

    let anchors = place_labels(&points, &area);
    assert_eq!(anchors.len(), points.len());
    for anchor in anchors.values() {
        assert!(anchor.x >= area.left + 20.0 && anchor.x <= area.right - 20.0);
        assert!(anchor.y >= area.top + 20.0 && anchor.y <= area.bottom - 20.0);
    }
}

#[test]
fn sample_dataset_overview_matches_the_headline_cards() {
    let overview = FunnelOverview::from_markets(sample_markets()).unwrap();

    // The published overall cards round these to one decimal.
    assert!((overview.awareness - 58.6).abs() < 0.05);
    assert!((overview.familiarity - 39.2).abs() < 0.05);
    assert!((overview.consideration - 27.5).abs() < 0.05);
    assert!((overview.intent - 14.6).abs() < 0.05);
}

#[test]
fn classification_serializes_to_json_and_back() {
    let result = QuadrantAnalyzer::new().classify(sample_markets()).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let restored: market_compass::quadrant::Classification = serde_json::from_str(&json).unwrap();
    assert_eq!(result, restored);
}
