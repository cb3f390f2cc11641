//! Shared test utilities for the flash-reach unit tests.

/// Tolerance for comparing unrounded floating-point results.
pub const EPSILON: f64 = 1e-9;

/// Assert two floats agree to within [`EPSILON`].
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Assert distances never grow as the aperture closes down.
#[track_caller]
pub fn assert_non_increasing(distances: &[f64]) {
    for pair in distances.windows(2) {
        assert!(
            pair[0] >= pair[1],
            "distance grew from {} to {} in {:?}",
            pair[0],
            pair[1],
            distances
        );
    }
}
