//! Calculator configuration module.
//!
//! Handles loading and validating the optional `flash-reach.toml` file. Keys
//! the file sets override the stock defaults; everything else keeps its
//! default.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [defaults]
//! # flash = "Godox V1"     # Catalog device used when no --flash/--gn is given
//! guide_number = 40        # Manual guide number (5-90)
//! iso = 100                # One of 100, 200, 400, 800, 1600, 3200, 6400
//! aperture = 5.6           # One of 1.4, 1.8, 2, 2.8, 4, 5.6, 8, 11, 16, 22
//!
//! [table]
//! apertures = [1.4, 1.8, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0]
//!
//! [visualization]
//! span_m = 20.0            # Distance covered by the full bar, in metres
//! width = 40               # Bar width in characters (10-200)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [defaults]
//! iso = 400
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::catalog;
use crate::scales::{
    APERTURE_STOPS, GUIDE_NUMBER_MAX, GUIDE_NUMBER_MIN, aperture_index, aperture_stops_list,
    guide_number_in_range, iso_index, iso_stops_list,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Narrowest distance bar that still fits its axis labels.
pub const VISUALIZATION_MIN_WIDTH: usize = 10;

/// Widest distance bar.
pub const VISUALIZATION_MAX_WIDTH: usize = 200;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "flash-reach.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Calculator configuration loaded from `flash-reach.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Starting values for the calculator inputs.
    pub defaults: DefaultsConfig,
    /// Per-aperture breakdown settings.
    pub table: TableConfig,
    /// Distance bar settings.
    pub visualization: VisualizationConfig,
}

impl CalculatorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let defaults = &self.defaults;
        if let Some(name) = &defaults.flash {
            catalog::lookup(name)
                .map_err(|e| ConfigError::Validation(format!("defaults.flash: {e}")))?;
        }
        if !guide_number_in_range(defaults.guide_number) {
            return Err(ConfigError::Validation(format!(
                "defaults.guide_number must be {GUIDE_NUMBER_MIN}-{GUIDE_NUMBER_MAX}"
            )));
        }
        if iso_index(defaults.iso).is_none() {
            return Err(ConfigError::Validation(format!(
                "defaults.iso must be one of {}",
                iso_stops_list()
            )));
        }
        if aperture_index(defaults.aperture).is_none() {
            return Err(ConfigError::Validation(format!(
                "defaults.aperture must be one of {}",
                aperture_stops_list()
            )));
        }
        if self.table.apertures.is_empty() {
            return Err(ConfigError::Validation(
                "table.apertures must not be empty".into(),
            ));
        }
        if self.table.apertures.iter().any(|&a| a.is_nan() || a <= 0.0) {
            return Err(ConfigError::Validation(
                "table.apertures values must be positive".into(),
            ));
        }
        if self.visualization.span_m.is_nan() || self.visualization.span_m <= 0.0 {
            return Err(ConfigError::Validation(
                "visualization.span_m must be positive".into(),
            ));
        }
        let widths = VISUALIZATION_MIN_WIDTH..=VISUALIZATION_MAX_WIDTH;
        if !widths.contains(&self.visualization.width) {
            return Err(ConfigError::Validation(format!(
                "visualization.width must be {VISUALIZATION_MIN_WIDTH}-{VISUALIZATION_MAX_WIDTH}"
            )));
        }
        Ok(())
    }
}

/// Starting values for the calculator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Catalog device name. When set it wins over `guide_number`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<String>,
    /// Manual guide number, 5-90.
    pub guide_number: f64,
    /// ISO stop.
    pub iso: u32,
    /// Aperture stop.
    pub aperture: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            flash: None,
            guide_number: 40.0,
            iso: 100,
            aperture: 5.6,
        }
    }
}

/// Per-aperture breakdown settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Apertures listed by `calc`, in display order.
    pub apertures: Vec<f64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            apertures: APERTURE_STOPS.to_vec(),
        }
    }
}

/// Distance bar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizationConfig {
    /// Distance represented by the full bar, in metres.
    pub span_m: f64,
    /// Bar width in characters.
    pub width: usize,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            span_m: 20.0,
            width: 40,
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse config text and validate it.
///
/// Every section and key is `#[serde(default)]`, so a sparse file fills the
/// rest from [`CalculatorConfig::default`]; `deny_unknown_fields` catches typos.
pub fn parse_config(content: &str) -> Result<CalculatorConfig, ConfigError> {
    let config: CalculatorConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`.
///
/// A missing file yields the stock defaults; an existing one goes through
/// [`parse_config`].
pub fn load_config(path: &Path) -> Result<CalculatorConfig, ConfigError> {
    if !path.exists() {
        return Ok(CalculatorConfig::default());
    }
    parse_config(&fs::read_to_string(path)?)
}

/// Returns a fully-commented stock `flash-reach.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# flash-reach configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Command-line flags (--flash, --gn, --iso, --aperture) override these.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Starting values
# ---------------------------------------------------------------------------
[defaults]
# Catalog device to use when neither --flash nor --gn is given.
# Run 'flash-reach flashes' for the list of names (case-sensitive).
# flash = "Godox V1"

# Manual guide number (ISO 100, metres). Must be between 5 and 90.
guide_number = 40

# ISO sensitivity: 100, 200, 400, 800, 1600, 3200 or 6400.
iso = 100

# Aperture: 1.4, 1.8, 2, 2.8, 4, 5.6, 8, 11, 16 or 22.
aperture = 5.6

# ---------------------------------------------------------------------------
# Per-aperture table
# ---------------------------------------------------------------------------
[table]
# Apertures listed under the headline result, in display order.
apertures = [1.4, 1.8, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0]

# ---------------------------------------------------------------------------
# Distance bar
# ---------------------------------------------------------------------------
[visualization]
# Distance covered by the full bar, in metres.
span_m = 20.0

# Bar width in characters (10-200).
width = 40
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = CalculatorConfig::default();
        assert_eq!(config.defaults.flash, None);
        assert_eq!(config.defaults.guide_number, 40.0);
        assert_eq!(config.defaults.iso, 100);
        assert_eq!(config.defaults.aperture, 5.6);
        assert_eq!(config.table.apertures, APERTURE_STOPS.to_vec());
        assert_eq!(config.visualization.span_m, 20.0);
        assert_eq!(config.visualization.width, 40);
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(CalculatorConfig::default().validate().is_ok());
    }

    #[test]
    fn stock_config_toml_matches_defaults() {
        let parsed: CalculatorConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(parsed, CalculatorConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let config: CalculatorConfig = toml::from_str(
            r#"
[defaults]
iso = 800
"#,
        )
        .unwrap();
        assert_eq!(config.defaults.iso, 800);
        // Default values preserved
        assert_eq!(config.defaults.aperture, 5.6);
        assert_eq!(config.visualization.width, 40);
    }

    #[test]
    fn integer_aperture_accepted() {
        let config: CalculatorConfig = toml::from_str(
            r#"
[defaults]
aperture = 8
"#,
        )
        .unwrap();
        assert_eq!(config.defaults.aperture, 8.0);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            r#"
[defaults]
flash = "Godox AD600 Pro"
aperture = 11

[visualization]
span_m = 30.0
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.defaults.flash.as_deref(), Some("Godox AD600 Pro"));
        assert_eq!(config.defaults.aperture, 11.0);
        assert_eq!(config.visualization.span_m, 30.0);
        // Unspecified values should be defaults
        assert_eq!(config.defaults.iso, 100);
        assert_eq!(config.visualization.width, 40);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "this is not [valid toml").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            r#"
[defaults]
iso = 250
"#,
        )
        .unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("defaults.iso"));
    }

    #[test]
    fn parse_config_partial_section_keeps_sibling_defaults() {
        let config = parse_config("[visualization]\nwidth = 60\n").unwrap();
        assert_eq!(config.visualization.width, 60);
        assert_eq!(config.visualization.span_m, 20.0);
        assert_eq!(config.defaults, DefaultsConfig::default());
    }

    #[test]
    fn parse_config_runs_validation() {
        let err = parse_config("[defaults]\naperture = 3.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<CalculatorConfig, _> = toml::from_str(
            r#"
[defaults]
isso = 100
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<CalculatorConfig, _> = toml::from_str(
            r#"
[colors]
bar = "yellow"
"#,
        );
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_unknown_flash() {
        let mut config = CalculatorConfig::default();
        config.defaults.flash = Some("Metz 64".into());
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("defaults.flash"));
    }

    #[test]
    fn validate_known_flash() {
        let mut config = CalculatorConfig::default();
        config.defaults.flash = Some("Nikon SB-700".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_guide_number_range() {
        let mut config = CalculatorConfig::default();
        config.defaults.guide_number = 90.0;
        assert!(config.validate().is_ok());
        config.defaults.guide_number = 95.0;
        assert!(config.validate().is_err());
        config.defaults.guide_number = 4.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_aperture_must_be_stop() {
        let mut config = CalculatorConfig::default();
        config.defaults.aperture = 3.5;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("defaults.aperture"));
    }

    #[test]
    fn validate_table_apertures() {
        let mut config = CalculatorConfig::default();
        config.table.apertures = vec![];
        assert!(config.validate().is_err());
        // Table apertures need not be stops, only positive
        config.table.apertures = vec![3.5, 6.3];
        assert!(config.validate().is_ok());
        config.table.apertures = vec![2.8, 0.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_visualization() {
        let mut config = CalculatorConfig::default();
        config.visualization.span_m = 0.0;
        assert!(config.validate().is_err());
        config.visualization.span_m = 20.0;
        config.visualization.width = 5;
        assert!(config.validate().is_err());
        config.visualization.width = 200;
        assert!(config.validate().is_ok());
        config.visualization.width = 201;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_huge_width_from_file() {
        let err = parse_config("[visualization]\nwidth = 9223372036854775807\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config validation error: visualization.width must be 10-200"
        );
    }
}
