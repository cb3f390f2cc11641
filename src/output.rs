//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Calc
//!
//! ```text
//! Flash: Canon 600EX II-RT (GN 60)
//! Settings: ISO 400, f/5.6
//!
//! Max distance: 21.4m
//! Effective GN at ISO 400: 120
//!
//! *====================================|.. 21.4m
//! 0m        5m        10m      15m       20m
//!
//! Distances by aperture (ISO 400)
//!     f/1.4    85.7m
//!     ...
//!   > f/5.6    21.4m
//! ```
//!
//! ## Table
//!
//! ```text
//! Flash: Manual (GN 60)
//! ISO     f/1.4  f/1.8    f/2 ...
//! 100      42.9   33.3   30.0 ...
//! ```
//!
//! ## Flashes
//!
//! ```text
//! Canon 430EX III-RT (GN 43)    Canon     Hotshoe
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure — no I/O, no side effects.

use crate::catalog::DeviceRating;
use crate::config::VisualizationConfig;
use crate::engine::{GuideNumberSource, round_guide_number};
use crate::scales::format_aperture;
use crate::types::{CalculatorResult, DistanceEntry, IsoRow};

/// The marker never runs past this share of the bar, so its label stays visible.
const MARKER_MAX_PERCENT: f64 = 95.0;

/// Number of intervals on the distance axis.
const AXIS_INTERVALS: usize = 4;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a distance in metres: `10.7m`, `20m`.
fn format_distance(distance: f64) -> String {
    format!("{}m", distance)
}

/// Describe where the guide number came from.
///
/// ```text
/// Canon 600EX II-RT (GN 60)
/// Manual (GN 40)
/// ```
pub fn format_source(source: &GuideNumberSource<'_>) -> String {
    match source {
        GuideNumberSource::Device(device) => device.label(),
        GuideNumberSource::Manual(gn) => format!("Manual (GN {})", gn),
    }
}

fn same_aperture(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Visualisation
// ============================================================================

/// Horizontal position of the distance marker, as a percentage of the bar.
pub fn marker_percent(distance: f64, span: f64) -> f64 {
    (distance / span * 100.0).min(MARKER_MAX_PERCENT)
}

/// Whether the subject figure fits on the bar.
pub fn subject_in_view(distance: f64, span: f64) -> bool {
    distance <= span
}

/// Map a percentage onto a column of a `width`-character bar.
fn percent_to_column(percent: f64, width: usize) -> usize {
    let last = width.saturating_sub(1) as f64;
    (percent / 100.0 * last).round().clamp(0.0, last) as usize
}

/// Axis labels: `0m 5m 10m 15m 20m` for a 20 m span, spread across the bar.
fn format_axis(span: f64, width: usize) -> String {
    let mut line = String::new();
    for i in 0..=AXIS_INTERVALS {
        let fraction = i as f64 / AXIS_INTERVALS as f64;
        let column = percent_to_column(fraction * 100.0, width);
        let label = format_distance(span * fraction);
        if !line.is_empty() {
            line.push(' ');
        }
        while line.len() < column {
            line.push(' ');
        }
        line.push_str(&label);
    }
    line
}

/// Draw the flash's reach as a text bar.
///
/// ```text
/// *====================|................... 10.7m
///                      ^ subject
/// 0m        5m        10m      15m       20m
/// ```
///
/// The subject line only appears when the distance fits within the span.
pub fn format_visualization(distance: f64, config: &VisualizationConfig) -> Vec<String> {
    let width = config.width;
    let marker = percent_to_column(marker_percent(distance, config.span_m), width).max(1);

    let mut bar = String::with_capacity(width + 8);
    bar.push('*');
    bar.push_str(&"=".repeat(marker - 1));
    bar.push('|');
    bar.push_str(&".".repeat(width.saturating_sub(marker + 1)));
    bar.push(' ');
    bar.push_str(&format_distance(distance));

    let mut lines = vec![bar];
    if subject_in_view(distance, config.span_m) {
        let column = percent_to_column(distance / config.span_m * 100.0, width);
        lines.push(format!("{}^ subject", " ".repeat(column)));
    }
    lines.push(format_axis(config.span_m, width));
    lines
}

// ============================================================================
// calc
// ============================================================================

/// Per-aperture breakdown with the selected aperture marked by `>`.
pub fn format_distance_table(
    iso: f64,
    entries: &[DistanceEntry],
    selected_aperture: f64,
) -> Vec<String> {
    let mut lines = vec![format!("Distances by aperture (ISO {})", iso)];
    for entry in entries {
        let marker = if same_aperture(entry.aperture, selected_aperture) {
            ">"
        } else {
            " "
        };
        lines.push(format!(
            "  {} {:<6} {:>7}",
            marker,
            format_aperture(entry.aperture),
            format_distance(entry.distance)
        ));
    }
    lines
}

/// Full `calc` output: source, headline, visualisation, table.
pub fn format_calc_output(
    result: &CalculatorResult,
    source: &GuideNumberSource<'_>,
    visualization: &VisualizationConfig,
) -> Vec<String> {
    let mut lines = vec![
        format!("Flash: {}", format_source(source)),
        format!(
            "Settings: ISO {}, {}",
            result.iso,
            format_aperture(result.aperture)
        ),
        String::new(),
        format!("Max distance: {}", format_distance(result.max_distance)),
        format!(
            "Effective GN at ISO {}: {}",
            result.iso,
            round_guide_number(result.effective_guide_number)
        ),
        String::new(),
    ];
    lines.extend(format_visualization(result.max_distance, visualization));
    lines.push(String::new());
    lines.extend(format_distance_table(
        result.iso,
        &result.distance_by_aperture,
        result.aperture,
    ));
    lines
}

/// Print `calc` output to stdout.
pub fn print_calc_output(
    result: &CalculatorResult,
    source: &GuideNumberSource<'_>,
    visualization: &VisualizationConfig,
) {
    for line in format_calc_output(result, source, visualization) {
        println!("{}", line);
    }
}

// ============================================================================
// table
// ============================================================================

/// ISO × aperture grid of distances.
pub fn format_grid(source: &GuideNumberSource<'_>, rows: &[IsoRow]) -> Vec<String> {
    let mut lines = vec![format!("Flash: {}", format_source(source))];

    let mut header = format!("{:<6}", "ISO");
    if let Some(first) = rows.first() {
        for entry in &first.distances {
            header.push_str(&format!(" {:>6}", format_aperture(entry.aperture)));
        }
    }
    lines.push(header);

    for row in rows {
        let mut line = format!("{:<6}", row.iso);
        for entry in &row.distances {
            line.push_str(&format!(" {:>6.1}", entry.distance));
        }
        lines.push(line);
    }
    lines.push(String::new());
    lines.push("Distances in metres.".to_string());
    lines
}

/// Print the ISO × aperture grid to stdout.
pub fn print_grid(source: &GuideNumberSource<'_>, rows: &[IsoRow]) {
    for line in format_grid(source, rows) {
        println!("{}", line);
    }
}

// ============================================================================
// flashes
// ============================================================================

/// One line per device: label, brand, category.
pub fn format_catalog(devices: &[&DeviceRating]) -> Vec<String> {
    if devices.is_empty() {
        return vec!["No flashes found".to_string()];
    }
    devices
        .iter()
        .map(|d| format!("{:<32} {:<9} {}", d.label(), d.brand, d.category))
        .collect()
}

/// Print the catalog listing to stdout.
pub fn print_catalog(devices: &[&DeviceRating]) {
    for line in format_catalog(devices) {
        println!("{}", line);
    }
}

// ============================================================================
// explain
// ============================================================================

pub fn format_explainer() -> Vec<String> {
    vec![
        "Understanding the guide number".to_string(),
        String::new(),
        "The guide number (GN) measures a flash's power: the higher it is,".to_string(),
        "the further the flash reaches. Ratings are given at ISO 100, in metres.".to_string(),
        String::new(),
        "Formula: max distance = GN × √(ISO ÷ 100) ÷ aperture".to_string(),
        String::new(),
        "Tips: doubling the ISO is like raising the GN by about 40%.".to_string(),
        "Opening up one stop (e.g. f/8 → f/5.6) nearly doubles the distance.".to_string(),
    ]
}

pub fn print_explainer() {
    for line in format_explainer() {
        println!("{}", line);
    }
}
