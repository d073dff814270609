//! Floor-plan model and spatial indexing
//!
//! # Submodules
//! - `types` - Core primitives (Point, Rect, Polyline, Polygon, FloorPlan)
//! - `distance` - Distance and clipping algorithms
//! - `spatial` - R-tree index over the named floor-plan collections

mod distance;
mod spatial;
mod types;

pub use types::{shoelace_area, Entrance, FloorPlan, Point, Polygon, Polyline, Rect};

pub use distance::{
    midpoint, path_length, point_segment_distance, segment_rect_clip_length, Triangle,
};

pub use spatial::{Collection, IndexedShape, Shape, SpatialIndex};
