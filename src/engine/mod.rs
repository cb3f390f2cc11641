//! Guide-number engine — stateless, pure arithmetic.
//!
//! | Operation | Function |
//! |---|---|
//! | **Effective GN** | [`compute_effective_guide_number`] |
//! | **Max distance** | [`compute_max_distance`] |
//! | **Distance table** | [`compute_distance_table`] |
//! | **Guide number source** | [`resolve_guide_number`] |
//! | **ISO × aperture grid** | [`distance_grid`] |
//!
//! The module is split into:
//! - **Calculations**: the formula, rounding, argument checks
//! - **Parameters**: input types and guide-number resolution
//! - **Operations**: the combined calculation the CLI renders

mod calculations;
mod operations;
mod params;

pub use calculations::{
    EngineError, REFERENCE_ISO, Result, compute_distance_table, compute_effective_guide_number,
    compute_max_distance, iso_factor, round_guide_number, round_to_tenth,
};
pub use operations::{calculate, calculate_with_apertures, distance_grid};
pub use params::{CalculatorInput, GuideNumberSource, ManualGuideNumber, resolve_guide_number};
