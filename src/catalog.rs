//! Bundled flash ratings.
//!
//! Guide numbers are the manufacturers' published values at ISO 100 with the
//! zoom head at 35mm, in metres. The table is compiled in and never changes
//! at runtime; adding a device is a data edit to [`DEVICES`].
//!
//! Names are the lookup keys. They are unique and case-sensitive, and the CLI
//! passes them through verbatim (`--flash "Godox V1"`).

use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Unknown flash {name:?}{}", format_suggestions(.suggestions))]
    UnknownDevice {
        name: String,
        suggestions: Vec<&'static str>,
    },
}

fn format_suggestions(suggestions: &[&str]) -> String {
    if suggestions.is_empty() {
        " (run 'flash-reach flashes' to list known devices)".to_string()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Published rating of one flash unit.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRating {
    pub name: &'static str,
    /// ISO 100, metres
    pub guide_number: f64,
    pub brand: &'static str,
    /// Form factor: hotshoe speedlight, portable, built-in…
    pub category: &'static str,
}

impl DeviceRating {
    /// Label used in listings: `Godox V1 (GN 76)`.
    pub fn label(&self) -> String {
        format!("{} (GN {})", self.name, self.guide_number)
    }
}

const fn device(
    name: &'static str,
    guide_number: f64,
    brand: &'static str,
    category: &'static str,
) -> DeviceRating {
    DeviceRating {
        name,
        guide_number,
        brand,
        category,
    }
}

const HOTSHOE: &str = "Hotshoe";
const PORTABLE: &str = "Portable";
const STUDIO_PORTABLE: &str = "Portable studio";
const BUILT_IN: &str = "Built-in";

/// Every known device, grouped by brand.
pub static DEVICES: &[DeviceRating] = &[
    // Canon Speedlites
    device("Canon 600EX II-RT", 60.0, "Canon", HOTSHOE),
    device("Canon 580EX II", 58.0, "Canon", HOTSHOE),
    device("Canon 430EX III-RT", 43.0, "Canon", HOTSHOE),
    device("Canon EL-1", 60.0, "Canon", HOTSHOE),
    // Nikon Speedlights
    device("Nikon SB-5000", 55.0, "Nikon", HOTSHOE),
    device("Nikon SB-910", 48.0, "Nikon", HOTSHOE),
    device("Nikon SB-700", 38.0, "Nikon", HOTSHOE),
    // Sony
    device("Sony HVL-F60RM2", 60.0, "Sony", HOTSHOE),
    device("Sony HVL-F46RM", 46.0, "Sony", HOTSHOE),
    // Godox
    device("Godox V1", 76.0, "Godox", HOTSHOE),
    device("Godox V860 III", 60.0, "Godox", HOTSHOE),
    device("Godox TT685 II", 60.0, "Godox", HOTSHOE),
    device("Godox AD200 Pro", 52.0, "Godox", PORTABLE),
    device("Godox AD400 Pro", 72.0, "Godox", STUDIO_PORTABLE),
    device("Godox AD600 Pro", 87.0, "Godox", STUDIO_PORTABLE),
    // Profoto
    device("Profoto A1X", 46.0, "Profoto", HOTSHOE),
    device("Profoto B10", 56.0, "Profoto", STUDIO_PORTABLE),
    // Pop-up flashes
    device("Built-in flash (small)", 10.0, "Generic", BUILT_IN),
    device("Built-in flash (medium)", 12.0, "Generic", BUILT_IN),
];

/// Exact, case-sensitive lookup.
pub fn get(name: &str) -> Option<&'static DeviceRating> {
    DEVICES.iter().find(|d| d.name == name)
}

/// Like [`get`], but unknown names become an error carrying close matches.
pub fn lookup(name: &str) -> Result<&'static DeviceRating, CatalogError> {
    get(name).ok_or_else(|| CatalogError::UnknownDevice {
        name: name.to_string(),
        suggestions: suggest(name),
    })
}

/// All devices sorted by name, the order listings present them in.
pub fn devices() -> Vec<&'static DeviceRating> {
    let mut all: Vec<_> = DEVICES.iter().collect();
    all.sort_by(|a, b| a.name.cmp(b.name));
    all
}

/// Distinct brand names, sorted.
pub fn brands() -> Vec<&'static str> {
    DEVICES
        .iter()
        .map(|d| d.brand)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Devices of one brand (case-insensitive), sorted by name.
pub fn by_brand(brand: &str) -> Vec<&'static DeviceRating> {
    devices()
        .into_iter()
        .filter(|d| d.brand.eq_ignore_ascii_case(brand))
        .collect()
}

/// Names containing `query`, ignoring case. Empty queries match nothing.
pub fn suggest(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    devices()
        .into_iter()
        .filter(|d| d.name.to_lowercase().contains(&needle))
        .map(|d| d.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let names: BTreeSet<_> = DEVICES.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), DEVICES.len());
    }

    #[test]
    fn ratings_are_positive() {
        assert!(DEVICES.iter().all(|d| d.guide_number > 0.0));
    }

    #[test]
    fn get_is_exact_and_case_sensitive() {
        assert_eq!(get("Godox V1").map(|d| d.guide_number), Some(76.0));
        assert!(get("godox v1").is_none());
        assert!(get("Godox").is_none());
    }

    #[test]
    fn devices_sorted_by_name() {
        let names: Vec<_> = devices().iter().map(|d| d.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 19);
    }

    #[test]
    fn brands_are_distinct_and_sorted() {
        assert_eq!(
            brands(),
            vec!["Canon", "Generic", "Godox", "Nikon", "Profoto", "Sony"]
        );
    }

    #[test]
    fn by_brand_ignores_case() {
        let nikon = by_brand("nikon");
        assert_eq!(nikon.len(), 3);
        assert_eq!(nikon[0].name, "Nikon SB-5000");
    }

    #[test]
    fn label_shows_rating() {
        assert_eq!(get("Godox V1").unwrap().label(), "Godox V1 (GN 76)");
    }

    #[test]
    fn lookup_unknown_suggests_matches() {
        let err = lookup("sb-9").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownDevice {
                name: "sb-9".into(),
                suggestions: vec!["Nikon SB-910"],
            }
        );
        assert_eq!(
            err.to_string(),
            "Unknown flash \"sb-9\" (did you mean: Nikon SB-910?)"
        );
    }

    #[test]
    fn lookup_unknown_without_matches_points_to_listing() {
        let err = lookup("Metz 64").unwrap_err();
        assert!(err.to_string().contains("flash-reach flashes"));
    }

    #[test]
    fn suggest_empty_query_matches_nothing() {
        assert!(suggest("  ").is_empty());
    }
}
