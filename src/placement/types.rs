//! Placement data types: size categories, unit specs, placed units, rows

use serde::Serialize;

use crate::plan::{Point, Rect};

/// Closed set of unit size categories with the client's area bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    XLarge,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 4] = [
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::XLarge,
    ];

    /// Nominal footprint before per-spec size variation
    pub fn base_dimensions(&self) -> (f32, f32) {
        match self {
            SizeCategory::Small => (2.0, 1.5),
            SizeCategory::Medium => (3.0, 2.0),
            SizeCategory::Large => (4.0, 3.0),
            SizeCategory::XLarge => (5.0, 4.0),
        }
    }

    /// Area band in m² the category covers in the client's distribution
    pub fn area_range(&self) -> (f32, f32) {
        match self {
            SizeCategory::Small => (0.0, 1.0),
            SizeCategory::Medium => (1.0, 3.0),
            SizeCategory::Large => (3.0, 5.0),
            SizeCategory::XLarge => (5.0, 10.0),
        }
    }

    /// Display color for the rendering layer
    pub fn color(&self) -> &'static str {
        match self {
            SizeCategory::Small => "#FFFF00",
            SizeCategory::Medium => "#FFA500",
            SizeCategory::Large => "#008000",
            SizeCategory::XLarge => "#800080",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::XLarge => "xlarge",
        }
    }
}

/// A requested unit placement, not yet bound to a position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSpec {
    pub width: f32,
    pub height: f32,
    pub area: f32,
    pub category: SizeCategory,
}

impl UnitSpec {
    pub fn new(width: f32, height: f32, category: SizeCategory) -> Self {
        Self { width, height, area: width * height, category }
    }
}

/// A unit spec bound to a position by the placement engine
///
/// Immutable once emitted: row stamping consumes the placement list and
/// re-emits new values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedUnit {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub area: f32,
    #[serde(rename = "size_category")]
    pub category: SizeCategory,
    pub row_id: Option<u32>,
}

impl PlacedUnit {
    pub fn rect(&self) -> Rect {
        Rect::from_origin(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A cluster of units sharing an approximate vertical center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: u32,
    pub unit_ids: Vec<u32>,
    pub center: Point,
}

/// Everything one placement pass produces
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementResult {
    pub units: Vec<PlacedUnit>,
    pub rows: Vec<Row>,
    /// Specs no candidate position could satisfy (omitted, not fatal)
    pub dropped_specs: usize,
    /// Degenerate input geometries skipped during index builds
    pub skipped_geometries: usize,
}

impl PlacementResult {
    pub fn empty() -> Self {
        Self {
            units: Vec::new(),
            rows: Vec::new(),
            dropped_specs: 0,
            skipped_geometries: 0,
        }
    }
}
