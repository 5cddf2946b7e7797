//! Market Compass - brand-health market analytics.
//!
//! Turns a table of per-market funnel metrics into a mean-based quadrant
//! classification plus the scaling and label-layout data a charting layer
//! needs to render it. Pure computation: no I/O, no persisted state, every
//! operation re-derives its result from its inputs.

pub mod dataset;
pub mod foundation;
pub mod metrics;
pub mod quadrant;
