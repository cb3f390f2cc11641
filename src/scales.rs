//! Fixed settings the calculator offers.
//!
//! The engine accepts any positive ISO and aperture; these scales are what the
//! CLI lets a user pick from, the same full stops a camera dial would show.

/// ISO sensitivities, ascending.
pub const ISO_STOPS: [u32; 7] = [100, 200, 400, 800, 1600, 3200, 6400];

/// Aperture f-numbers, ascending (widest first).
pub const APERTURE_STOPS: [f64; 10] = [1.4, 1.8, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0];

/// Smallest guide number accepted for manual entry.
pub const GUIDE_NUMBER_MIN: f64 = 5.0;

/// Largest guide number accepted for manual entry.
pub const GUIDE_NUMBER_MAX: f64 = 90.0;

/// Position of `iso` on the ISO scale.
pub fn iso_index(iso: u32) -> Option<usize> {
    ISO_STOPS.iter().position(|&stop| stop == iso)
}

/// Position of `aperture` on the aperture scale.
///
/// Compares with a small tolerance so `5.6` parsed from text or TOML matches
/// the stop regardless of representation.
pub fn aperture_index(aperture: f64) -> Option<usize> {
    APERTURE_STOPS
        .iter()
        .position(|&stop| (stop - aperture).abs() < 1e-9)
}

/// Whether `value` lies in the manual guide-number range.
pub fn guide_number_in_range(value: f64) -> bool {
    (GUIDE_NUMBER_MIN..=GUIDE_NUMBER_MAX).contains(&value)
}

/// Render an aperture the way lens barrels print it: `f/2`, `f/5.6`.
pub fn format_aperture(aperture: f64) -> String {
    format!("f/{}", aperture)
}

/// Comma-separated list of the ISO stops, for error messages.
pub fn iso_stops_list() -> String {
    ISO_STOPS
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated list of the aperture stops, for error messages.
pub fn aperture_stops_list() -> String {
    APERTURE_STOPS
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
