//! Result types shared between the engine and the presentation layer.
//!
//! These are serialized to JSON by `flash-reach calc --json`, so field names
//! are part of the command's output contract.

use serde::{Deserialize, Serialize};

/// Distance reachable at one aperture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceEntry {
    /// f-number
    pub aperture: f64,
    /// Metres, rounded to one decimal
    pub distance: f64,
}

/// Everything derived from one set of calculator inputs.
///
/// Recomputed on every request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    /// Rating the calculation started from (ISO 100)
    pub guide_number: f64,
    pub iso: f64,
    pub aperture: f64,
    /// Guide number at `iso`, unrounded
    pub effective_guide_number: f64,
    /// Metres, rounded to one decimal
    pub max_distance: f64,
    /// One entry per requested aperture, in request order
    pub distance_by_aperture: Vec<DistanceEntry>,
}

/// Distances at every requested aperture for one ISO setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsoRow {
    pub iso: u32,
    pub distances: Vec<DistanceEntry>,
}
