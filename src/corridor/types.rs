//! Corridor data types and generation parameters

use serde::Serialize;

use crate::plan::{path_length, Point};

/// Corridor classes, generated in stage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorridorKind {
    /// Entrance to row center
    Main,
    /// Between facing rows (mandatory client rule)
    Facing,
    /// Connectivity repair between disconnected unit groups
    Secondary,
}

/// A corridor in the synthesized network
///
/// Corridors reference rows and entrances by id only; they own none of the
/// units they connect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Corridor {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: CorridorKind,
    #[serde(rename = "points")]
    pub path: Vec<Point>,
    pub width: f32,
    pub length: f32,
    pub is_mandatory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance_id: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub row_ids: Vec<u32>,
}

impl Corridor {
    pub fn new(id: u32, kind: CorridorKind, path: Vec<Point>, width: f32) -> Self {
        let length = path_length(&path);
        let is_mandatory = matches!(kind, CorridorKind::Main | CorridorKind::Facing);
        Self {
            id,
            kind,
            path,
            width,
            length,
            is_mandatory,
            entrance_id: None,
            row_ids: Vec::new(),
        }
    }

    /// First and last path points, `None` for a malformed path
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match (self.path.first(), self.path.last()) {
            (Some(&a), Some(&b)) if self.path.len() >= 2 => Some((a, b)),
            _ => None,
        }
    }
}

/// Tuning parameters for corridor synthesis
#[derive(Debug, Clone)]
pub struct CorridorParams {
    /// Base corridor width; facing and secondary corridors use it directly
    pub corridor_width: f32,
    /// Max vertical separation for two rows to count as facing
    pub facing_max_y_gap: f32,
    /// Min horizontal separation for two rows to count as facing
    pub facing_min_x_gap: f32,
    /// Endpoint proximity at which two corridors are considered overlapping
    pub endpoint_merge_distance: f32,
    /// Corridors shorter than this are dropped before pruning
    pub min_corridor_length: f32,
}

impl CorridorParams {
    /// Main corridors are half again as wide as the base width
    pub fn main_width(&self) -> f32 {
        self.corridor_width * 1.5
    }

    pub fn secondary_width(&self) -> f32 {
        self.corridor_width
    }
}

impl Default for CorridorParams {
    fn default() -> Self {
        Self {
            corridor_width: 1.5,
            facing_max_y_gap: 5.0,
            facing_min_x_gap: 3.0,
            endpoint_merge_distance: 2.0,
            min_corridor_length: 1.0,
        }
    }
}
