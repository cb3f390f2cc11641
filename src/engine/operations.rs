//! High-level calculator operation.
//!
//! Combines the pure calculations into the full result the presentation layer
//! renders: headline distance, effective guide number, and the per-aperture
//! breakdown over the standard stops.

use super::calculations::{
    Result, compute_distance_table, compute_effective_guide_number, compute_max_distance,
};
use super::params::CalculatorInput;
use crate::scales::APERTURE_STOPS;
use crate::types::{CalculatorResult, IsoRow};

/// Compute the full result for `input` over the standard aperture stops.
pub fn calculate(input: &CalculatorInput) -> Result<CalculatorResult> {
    calculate_with_apertures(input, &APERTURE_STOPS)
}

/// Compute the full result, breaking distances down over `apertures`.
pub fn calculate_with_apertures(
    input: &CalculatorInput,
    apertures: &[f64],
) -> Result<CalculatorResult> {
    Ok(CalculatorResult {
        guide_number: input.guide_number,
        iso: input.iso,
        aperture: input.aperture,
        effective_guide_number: compute_effective_guide_number(input.guide_number, input.iso)?,
        max_distance: compute_max_distance(input.guide_number, input.iso, input.aperture)?,
        distance_by_aperture: compute_distance_table(input.guide_number, input.iso, apertures)?,
    })
}

/// Distance grid for one guide number: a row per ISO, a column per aperture.
///
/// Rows and columns keep the order they were requested in.
pub fn distance_grid(guide_number: f64, isos: &[u32], apertures: &[f64]) -> Result<Vec<IsoRow>> {
    isos.iter()
        .map(|&iso| {
            Ok(IsoRow {
                iso,
                distances: compute_distance_table(guide_number, f64::from(iso), apertures)?,
            })
        })
        .collect()
}
