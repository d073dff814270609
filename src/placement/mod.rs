//! Unit placement engine
//!
//! # Submodules
//! - `types` - Size categories, specs, placed units, rows
//! - `config` - Size mix, spacing parameters, scoring strategy selection
//! - `specs` - Spec generation from the configured mix
//! - `grid` - Jittered candidate-position grid
//! - `scoring` - Pluggable candidate scoring
//! - `engine` - Greedy largest-first placement loop
//! - `rows` - Row detection over placed units

mod config;
mod engine;
mod grid;
mod rows;
mod scoring;
mod specs;
mod types;

pub use types::{PlacedUnit, PlacementResult, Row, SizeCategory, UnitSpec};

pub use config::{PlacementParams, ScoringStrategy, SizeMix};

pub use engine::{place_specs, place_units};

pub use rows::{assign_rows, detect_rows};

pub use specs::generate_specs;
