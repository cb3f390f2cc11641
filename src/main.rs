use clap::{Parser, Subcommand};
use flash_reach::catalog::{self, CatalogError};
use flash_reach::config::{self, DEFAULT_CONFIG_FILE, DefaultsConfig};
use flash_reach::engine::{self, CalculatorInput, GuideNumberSource, ManualGuideNumber};
use flash_reach::output;
use flash_reach::scales::{
    APERTURE_STOPS, ISO_STOPS, aperture_index, aperture_stops_list, iso_index, iso_stops_list,
};
use std::path::PathBuf;

/// Where the guide number comes from. `--flash` wins over `--gn`.
#[derive(clap::Args, Clone)]
struct FlashArgs {
    /// Flash from the catalog, by exact name (see 'flash-reach flashes')
    #[arg(long)]
    flash: Option<String>,

    /// Manual guide number at ISO 100, in metres (clamped to 5-90)
    #[arg(long)]
    gn: Option<f64>,
}

fn version_string() -> &'static str {
    let on_tag = env!("FLASH_REACH_ON_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("FLASH_REACH_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "flash-reach")]
#[command(about = "How far can your flash reach?")]
#[command(long_about = "\
How far can your flash reach?

Estimates the maximum distance a flash can properly light a subject from its
guide number, the ISO setting and the aperture:

  max distance = GN × √(ISO ÷ 100) ÷ aperture

Pick a flash from the built-in catalog with --flash, or enter its guide number
with --gn. Starting values can be set in flash-reach.toml; run
'flash-reach gen-config' to print a documented one.

Examples:

  flash-reach calc --flash \"Godox V1\" --iso 400 --aperture 5.6
  flash-reach calc --gn 43 --aperture f/2.8 --json
  flash-reach table --flash \"Nikon SB-700\"
  flash-reach flashes --brand godox")]
#[command(version = version_string())]
struct Cli {
    /// Config file with starting values
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the maximum flash distance for one setting
    Calc {
        #[command(flatten)]
        flash: FlashArgs,

        /// ISO sensitivity (100, 200, 400, 800, 1600, 3200, 6400)
        #[arg(long, value_parser = parse_iso)]
        iso: Option<u32>,

        /// Aperture, with or without the f/ prefix (1.4 … 22)
        #[arg(long, value_parser = parse_aperture)]
        aperture: Option<f64>,

        /// Print the result as JSON (breakdown covers every aperture stop,
        /// ignoring [table].apertures)
        #[arg(long)]
        json: bool,
    },
    /// Print distances for every ISO and aperture
    Table {
        #[command(flatten)]
        flash: FlashArgs,
    },
    /// List the flashes in the catalog
    Flashes {
        /// Only show one brand
        #[arg(long)]
        brand: Option<String>,
    },
    /// Explain the guide number and the formula
    Explain,
    /// Print a stock flash-reach.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Calc {
            flash,
            iso,
            aperture,
            json,
        } => {
            let config = config::load_config(&cli.config)?;
            let source = resolve_source(&flash, &config.defaults)?;
            let input = CalculatorInput::new(
                source,
                iso.unwrap_or(config.defaults.iso),
                aperture.unwrap_or(config.defaults.aperture),
            );
            if json {
                // JSON always breaks down over the full aperture scale
                let result = engine::calculate(&input)?;
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let result = engine::calculate_with_apertures(&input, &config.table.apertures)?;
                output::print_calc_output(&result, &source, &config.visualization);
            }
        }
        Command::Table { flash } => {
            let config = config::load_config(&cli.config)?;
            let source = resolve_source(&flash, &config.defaults)?;
            let rows = engine::distance_grid(
                engine::resolve_guide_number(source),
                &ISO_STOPS,
                &APERTURE_STOPS,
            )?;
            output::print_grid(&source, &rows);
        }
        Command::Flashes { brand } => {
            let devices = match &brand {
                Some(b) => catalog::by_brand(b),
                None => catalog::devices(),
            };
            output::print_catalog(&devices);
            if devices.is_empty() {
                println!("Brands: {}", catalog::brands().join(", "));
            }
        }
        Command::Explain => output::print_explainer(),
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Pick the guide number source: flags first, then configured defaults.
///
/// Manual values go through [`ManualGuideNumber`], which clamps them to the
/// accepted range before they reach the engine.
fn resolve_source(
    args: &FlashArgs,
    defaults: &DefaultsConfig,
) -> Result<GuideNumberSource<'static>, CatalogError> {
    if let Some(name) = &args.flash {
        return Ok(catalog::lookup(name)?.into());
    }
    if let Some(gn) = args.gn {
        return Ok(ManualGuideNumber::new(gn).into());
    }
    match &defaults.flash {
        Some(name) => Ok(catalog::lookup(name)?.into()),
        None => Ok(ManualGuideNumber::new(defaults.guide_number).into()),
    }
}

fn parse_iso(value: &str) -> Result<u32, String> {
    let iso: u32 = value
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {value}"))?;
    match iso_index(iso) {
        Some(_) => Ok(iso),
        None => Err(format!("ISO must be one of {}", iso_stops_list())),
    }
}

fn parse_aperture(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    let number = trimmed
        .strip_prefix("f/")
        .or_else(|| trimmed.strip_prefix("F/"))
        .unwrap_or(trimmed);
    let aperture: f64 = number
        .parse()
        .map_err(|_| format!("not a number: {value}"))?;
    match aperture_index(aperture) {
        Some(i) => Ok(APERTURE_STOPS[i]),
        None => Err(format!("aperture must be one of {}", aperture_stops_list())),
    }
}
