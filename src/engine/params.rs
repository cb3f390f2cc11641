//! Input types for the calculator.
//!
//! These describe *what* to compute. The [`operations`](super::operations)
//! module turns them into a [`CalculatorResult`](crate::types::CalculatorResult).
//!
//! ## Types
//!
//! - [`GuideNumberSource`] — either a cataloged device or a manual rating.
//! - [`ManualGuideNumber`] — a hand-entered rating, clamped to the slider range on construction.
//! - [`CalculatorInput`] — resolved guide number + ISO + aperture.

use crate::catalog::DeviceRating;
use crate::scales::{GUIDE_NUMBER_MAX, GUIDE_NUMBER_MIN};

/// A guide number typed in by the user (5–90). Clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualGuideNumber(f64);

impl ManualGuideNumber {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(GUIDE_NUMBER_MIN, GUIDE_NUMBER_MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ManualGuideNumber {
    fn default() -> Self {
        Self(40.0)
    }
}

/// Where the guide number comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuideNumberSource<'a> {
    /// A device picked from the catalog.
    Device(&'a DeviceRating),
    /// A manual value. Range checking is the caller's job; wrap the raw input
    /// in [`ManualGuideNumber`] to get the slider's clamping.
    Manual(f64),
}

impl From<ManualGuideNumber> for GuideNumberSource<'_> {
    fn from(gn: ManualGuideNumber) -> Self {
        GuideNumberSource::Manual(gn.value())
    }
}

impl<'a> From<&'a DeviceRating> for GuideNumberSource<'a> {
    fn from(device: &'a DeviceRating) -> Self {
        GuideNumberSource::Device(device)
    }
}

/// Pick the guide number for a calculation.
///
/// A selected device wins; otherwise the manual value is returned untouched.
pub fn resolve_guide_number(source: GuideNumberSource<'_>) -> f64 {
    match source {
        GuideNumberSource::Device(device) => device.guide_number,
        GuideNumberSource::Manual(value) => value,
    }
}

/// Everything the engine needs for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorInput {
    pub guide_number: f64,
    pub iso: f64,
    pub aperture: f64,
}

impl CalculatorInput {
    pub fn new(source: GuideNumberSource<'_>, iso: u32, aperture: f64) -> Self {
        Self {
            guide_number: resolve_guide_number(source),
            iso: f64::from(iso),
            aperture,
        }
    }
}
