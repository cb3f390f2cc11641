//! # flash-reach
//!
//! Estimates how far a flash can properly light a subject, from the flash's
//! guide number, the ISO setting and the lens aperture.
//!
//! # The Formula
//!
//! A guide number (GN) is rated at ISO 100 such that
//! `max distance = GN / aperture`. Other sensitivities scale the guide number
//! by `√(ISO / 100)`, since light falls off with the square of distance:
//!
//! ```text
//! max distance = GN × √(ISO / 100) / aperture
//! ```
//!
//! Two rules of thumb follow: doubling the ISO raises the effective GN by
//! about 40% (√2), and opening up one full stop nearly doubles the reach.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pure calculations: effective GN, max distance, per-aperture tables |
//! | [`catalog`] | Bundled, read-only flash ratings |
//! | [`scales`] | The ISO and aperture stops and the manual GN range offered to users |
//! | [`config`] | Optional `flash-reach.toml` loading, merging, and validation |
//! | [`types`] | Result types shared by the engine and the CLI (`CalculatorResult`) |
//! | [`output`] | CLI output formatting — result, distance bar, tables, catalog |
//!
//! # Design Decisions
//!
//! ## A Stateless Engine
//!
//! The engine is a handful of free functions over `f64`. There is nothing to
//! configure and nothing to cache: every result is recomputed from its inputs,
//! which keeps the functions trivially testable and safe to call from anywhere.
//!
//! ## Validation at the Edges
//!
//! The engine only refuses values that make the formula meaningless (zero,
//! negative, NaN). Restricting input to camera stops and clamping manual guide
//! numbers to 5–90 is the caller's job; the CLI does it when parsing flags,
//! and [`config`] does it when loading the file.
//!
//! ## A Compiled-In Catalog
//!
//! Flash ratings change only when manufacturers release new units, so the
//! catalog is a `static` table rather than a data file: no lookup paths, no
//! parse errors, and the binary works on its own.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod output;
pub mod scales;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
