//! Corridor network synthesis and pruning
//!
//! # Submodules
//! - `types` - Corridor data structures and parameters
//! - `graph` - Unit connectivity graph over corridor endpoints
//! - `generator` - Main / facing / secondary generation stages
//! - `prune` - Redundancy pruning with mandatory precedence

mod generator;
mod graph;
mod prune;
mod types;

pub use types::{Corridor, CorridorKind, CorridorParams};

pub use generator::generate_corridors;
pub use graph::UnitGraph;
pub use prune::prune_corridors;
