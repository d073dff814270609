//! Floor-plan unit placement and corridor synthesis
//!
//! This crate places rectangular space units (îlots) inside an architectural
//! floor plan and synthesizes a connecting corridor network, subject to
//! size-distribution targets, non-overlap, wall clearance, and connectivity
//! requirements. File ingestion, rendering, and export live in separate
//! layers; this core exchanges in-memory structured values only.
//!
//! # Modules
//! - `plan` - Floor-plan model and R-tree spatial indexing
//! - `placement` - Greedy largest-first unit placement with pluggable scoring
//! - `corridor` - Corridor network synthesis and redundancy pruning
//! - `stats` - Aggregate statistics for the reporting layer

pub mod corridor;
pub mod placement;
pub mod plan;
pub mod stats;

pub use plan::{Collection, Entrance, FloorPlan, Point, Polygon, Polyline, Rect, Shape, SpatialIndex};

pub use placement::{
    place_specs, place_units, PlacedUnit, PlacementParams, PlacementResult, Row, ScoringStrategy,
    SizeCategory, SizeMix, UnitSpec,
};

pub use corridor::{generate_corridors, Corridor, CorridorKind, CorridorParams, UnitGraph};

pub use stats::LayoutStats;

/// Everything one full pipeline run produces
#[derive(Debug, Clone)]
pub struct FloorLayout {
    pub units: Vec<PlacedUnit>,
    pub rows: Vec<Row>,
    pub corridors: Vec<Corridor>,
    pub stats: LayoutStats,
    pub dropped_specs: usize,
    pub skipped_geometries: usize,
}

/// Run the full pipeline: placement, row detection, corridor synthesis,
/// statistics. Total for any well-typed input; degenerate plans yield an
/// empty layout.
pub fn generate_layout(
    plan: &FloorPlan,
    placement_params: &PlacementParams,
    corridor_params: &CorridorParams,
) -> FloorLayout {
    let placement = place_units(plan, placement_params);
    let corridors = generate_corridors(plan, &placement.units, &placement.rows, corridor_params);
    let stats = LayoutStats::compute(&placement.units, &corridors);

    FloorLayout {
        units: placement.units,
        rows: placement.rows,
        corridors,
        stats,
        dropped_specs: placement.dropped_specs,
        skipped_geometries: placement.skipped_geometries,
    }
}
