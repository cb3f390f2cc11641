//! Pure exposure calculations.
//!
//! All functions here are pure and testable without any I/O. The only formula
//! involved is the guide-number relation:
//!
//! ```text
//! distance = GN × √(ISO / 100) / aperture
//! ```

use crate::types::DistanceEntry;
use thiserror::Error;

/// ISO sensitivity at which guide numbers are rated.
pub const REFERENCE_ISO: f64 = 100.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid argument: {name} must be positive (got {value})")]
    InvalidArgument { name: &'static str, value: f64 },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Reject zero, negative and NaN values.
fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidArgument { name, value })
    }
}

/// Round to one decimal place, the precision distances are reported at.
///
/// # Examples
/// ```
/// # use flash_reach::engine::round_to_tenth;
/// assert_eq!(round_to_tenth(10.714), 10.7);
/// assert_eq!(round_to_tenth(15.55), 15.6);
/// ```
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round an effective guide number to the nearest integer for display.
pub fn round_guide_number(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Sensitivity multiplier relative to ISO 100.
///
/// Light falls off with the square of distance, so doubling the sensitivity
/// extends reach by √2 rather than 2.
pub fn iso_factor(iso: f64) -> Result<f64> {
    let iso = require_positive("iso", iso)?;
    Ok((iso / REFERENCE_ISO).sqrt())
}

/// Guide number adjusted for a sensitivity other than ISO 100.
///
/// Returns the unrounded value; presentation code rounds with
/// [`round_guide_number`].
///
/// # Examples
/// ```
/// # use flash_reach::engine::compute_effective_guide_number;
/// assert_eq!(compute_effective_guide_number(60.0, 100.0).unwrap(), 60.0);
/// assert_eq!(compute_effective_guide_number(60.0, 400.0).unwrap(), 120.0);
/// ```
pub fn compute_effective_guide_number(guide_number: f64, iso: f64) -> Result<f64> {
    let guide_number = require_positive("guide_number", guide_number)?;
    Ok(guide_number * iso_factor(iso)?)
}

/// Maximum distance (metres, one decimal) the flash can light at `aperture`.
///
/// # Examples
/// ```
/// # use flash_reach::engine::compute_max_distance;
/// assert_eq!(compute_max_distance(60.0, 100.0, 5.6).unwrap(), 10.7);
/// assert_eq!(compute_max_distance(43.0, 100.0, 2.8).unwrap(), 15.4);
/// ```
pub fn compute_max_distance(guide_number: f64, iso: f64, aperture: f64) -> Result<f64> {
    let effective = compute_effective_guide_number(guide_number, iso)?;
    let aperture = require_positive("aperture", aperture)?;
    Ok(round_to_tenth(effective / aperture))
}

/// Apply [`compute_max_distance`] to every aperture, keeping the input order.
///
/// The sequence is not re-sorted: callers get one entry per input aperture,
/// in the position they supplied it.
pub fn compute_distance_table(
    guide_number: f64,
    iso: f64,
    apertures: &[f64],
) -> Result<Vec<DistanceEntry>> {
    apertures
        .iter()
        .map(|&aperture| {
            Ok(DistanceEntry {
                aperture,
                distance: compute_max_distance(guide_number, iso, aperture)?,
            })
        })
        .collect()
}
