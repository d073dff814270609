//! Spatial indexing over named floor-plan collections
//!
//! Three independently rebuildable R-tree indices back the placement and
//! corridor feasibility checks: wall segments, restricted-area polygons, and
//! placed units. Each rebuild constructs a complete tree before swapping it
//! in, so readers never observe a partially built index.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use super::distance::{point_segment_distance, segment_rect_clip_length, Triangle};
use super::types::{Point, Rect};

/// The three named collections the index answers queries for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Walls,
    Restricted,
    Units,
}

/// Input geometry accepted by `SpatialIndex::build`
#[derive(Debug, Clone)]
pub enum Shape {
    Segment(Point, Point),
    Polygon(Vec<Point>),
    Rect(Rect),
}

/// An indexed geometry with its precomputed envelope and, for polygons,
/// the earcut triangulation used for exact overlap measurement
#[derive(Clone, Debug)]
pub struct IndexedShape {
    pub shape: Shape,
    triangles: Vec<Triangle>,
    envelope: AABB<[f32; 2]>,
}

impl IndexedShape {
    /// Validate and index a shape; `None` means the geometry is degenerate
    /// and must be skipped (counted, not fatal).
    fn try_new(shape: Shape) -> Option<Self> {
        match &shape {
            Shape::Segment(a, b) => {
                if a.distance(b) < 1e-6 {
                    return None;
                }
                let envelope = AABB::from_corners(
                    [a.x.min(b.x), a.y.min(b.y)],
                    [a.x.max(b.x), a.y.max(b.y)],
                );
                Some(Self { shape, triangles: Vec::new(), envelope })
            }
            Shape::Polygon(points) => {
                if points.len() < 3 {
                    return None;
                }
                let ring_area = super::types::shoelace_area(points).abs();
                if ring_area < 1e-6 {
                    return None;
                }
                let triangles = triangulate(points);
                if triangles.is_empty() {
                    return None;
                }
                let mut min = [f32::MAX, f32::MAX];
                let mut max = [f32::MIN, f32::MIN];
                for p in points {
                    min[0] = min[0].min(p.x);
                    min[1] = min[1].min(p.y);
                    max[0] = max[0].max(p.x);
                    max[1] = max[1].max(p.y);
                }
                let envelope = AABB::from_corners(min, max);
                Some(Self { shape, triangles, envelope })
            }
            Shape::Rect(rect) => {
                if rect.is_degenerate() {
                    return None;
                }
                let envelope =
                    AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);
                Some(Self { shape, triangles: Vec::new(), envelope })
            }
        }
    }

    /// Exact distance from a point to this shape, 0.0 when on or inside
    pub fn distance_to(&self, p: &Point) -> f32 {
        match &self.shape {
            Shape::Segment(a, b) => point_segment_distance(*p, *a, *b),
            Shape::Rect(rect) => rect.distance_to_point(p),
            Shape::Polygon(points) => {
                if self.triangles.iter().any(|t| t.contains_point(p)) {
                    return 0.0;
                }
                let mut min_d = f32::MAX;
                for i in 0..points.len() {
                    let a = points[i];
                    let b = points[(i + 1) % points.len()];
                    min_d = min_d.min(point_segment_distance(*p, a, b));
                }
                min_d
            }
        }
    }

    /// Intersection measure against a rect: overlap area for rects and
    /// polygons, clipped length for segments.
    pub fn overlap_measure(&self, rect: &Rect) -> f32 {
        match &self.shape {
            Shape::Segment(a, b) => segment_rect_clip_length(*a, *b, rect),
            Shape::Rect(r) => r.intersection_area(rect),
            Shape::Polygon(_) => self
                .triangles
                .iter()
                .map(|t| t.clip_area_in_rect(rect))
                .sum(),
        }
    }
}

impl RTreeObject for IndexedShape {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl PointDistance for IndexedShape {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        self.envelope.distance_2(point)
    }
}

/// Earcut triangulation of a simple ring
fn triangulate(points: &[Point]) -> Vec<Triangle> {
    let mut flat_coords: Vec<f64> = Vec::with_capacity(points.len() * 2);
    for p in points {
        flat_coords.push(p.x as f64);
        flat_coords.push(p.y as f64);
    }
    let hole_indices: Vec<usize> = Vec::new();
    let indices = earcutr::earcut(&flat_coords, &hole_indices, 2).unwrap_or_default();
    indices
        .chunks(3)
        .filter(|c| c.len() == 3)
        .map(|c| Triangle::from_vertices(points[c[0]], points[c[1]], points[c[2]]))
        .collect()
}

/// R-tree index over the three named floor-plan collections
///
/// Querying a collection that was never built returns empty results: "no
/// known obstacles" is a valid and safe default.
pub struct SpatialIndex {
    walls: Option<RTree<IndexedShape>>,
    restricted: Option<RTree<IndexedShape>>,
    units: Option<RTree<IndexedShape>>,
    skipped_geometries: usize,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            walls: None,
            restricted: None,
            units: None,
            skipped_geometries: 0,
        }
    }

    fn slot(&self, collection: Collection) -> &Option<RTree<IndexedShape>> {
        match collection {
            Collection::Walls => &self.walls,
            Collection::Restricted => &self.restricted,
            Collection::Units => &self.units,
        }
    }

    fn slot_mut(&mut self, collection: Collection) -> &mut Option<RTree<IndexedShape>> {
        match collection {
            Collection::Walls => &mut self.walls,
            Collection::Restricted => &mut self.restricted,
            Collection::Units => &mut self.units,
        }
    }

    /// (Re)build one collection. Degenerate geometries are skipped and
    /// counted; the new tree replaces the old one only once fully built.
    pub fn build(&mut self, collection: Collection, shapes: Vec<Shape>) {
        let mut indexed = Vec::with_capacity(shapes.len());
        for shape in shapes {
            match IndexedShape::try_new(shape) {
                Some(s) => indexed.push(s),
                None => self.skipped_geometries += 1,
            }
        }
        let tree = RTree::bulk_load(indexed);
        *self.slot_mut(collection) = Some(tree);
    }

    /// All geometries within `radius` of `point`
    pub fn query_nearby(&self, collection: Collection, point: Point, radius: f32) -> Vec<&IndexedShape> {
        let Some(tree) = self.slot(collection).as_ref() else {
            return Vec::new();
        };
        let search = AABB::from_corners(
            [point.x - radius, point.y - radius],
            [point.x + radius, point.y + radius],
        );
        tree.locate_in_envelope_intersecting(&search)
            .filter(|s| s.distance_to(&point) <= radius)
            .collect()
    }

    /// True when some indexed geometry's intersection measure with `rect`
    /// exceeds `tolerance`
    pub fn overlaps(&self, collection: Collection, rect: &Rect, tolerance: f32) -> bool {
        let Some(tree) = self.slot(collection).as_ref() else {
            return false;
        };
        let search = AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);
        tree.locate_in_envelope_intersecting(&search)
            .any(|s| s.overlap_measure(rect) > tolerance)
    }

    /// Incrementally add one placed unit so later feasibility checks see it
    pub fn insert_unit(&mut self, rect: Rect) {
        if let Some(shape) = IndexedShape::try_new(Shape::Rect(rect)) {
            self.units.get_or_insert_with(RTree::new).insert(shape);
        }
    }

    /// Count of degenerate geometries dropped across all builds
    pub fn skipped_geometries(&self) -> usize {
        self.skipped_geometries
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min_x: f32, min_y: f32, side: f32) -> Vec<Point> {
        vec![
            Point::new(min_x, min_y),
            Point::new(min_x + side, min_y),
            Point::new(min_x + side, min_y + side),
            Point::new(min_x, min_y + side),
        ]
    }

    #[test]
    fn test_unbuilt_collection_is_safe() {
        let index = SpatialIndex::new();
        assert!(index.query_nearby(Collection::Walls, Point::new(0.0, 0.0), 5.0).is_empty());
        assert!(!index.overlaps(Collection::Units, &Rect::new(0.0, 0.0, 1.0, 1.0), 0.0));
    }

    #[test]
    fn test_query_nearby_filters_by_exact_distance() {
        let mut index = SpatialIndex::new();
        index.build(
            Collection::Walls,
            vec![
                Shape::Segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
                Shape::Segment(Point::new(0.0, 8.0), Point::new(10.0, 8.0)),
            ],
        );
        let near = index.query_nearby(Collection::Walls, Point::new(5.0, 1.0), 2.0);
        assert_eq!(near.len(), 1);
        let both = index.query_nearby(Collection::Walls, Point::new(5.0, 4.0), 5.0);
        assert_eq!(both.len(), 2);
    }

    #[test]
    fn test_overlap_tolerance() {
        let mut index = SpatialIndex::new();
        index.build(
            Collection::Units,
            vec![Shape::Rect(Rect::new(0.0, 0.0, 4.0, 4.0))],
        );
        let probe = Rect::new(3.0, 3.0, 6.0, 6.0); // 1.0 overlap area
        assert!(index.overlaps(Collection::Units, &probe, 0.5));
        assert!(!index.overlaps(Collection::Units, &probe, 1.5));
    }

    #[test]
    fn test_polygon_overlap_via_triangulation() {
        let mut index = SpatialIndex::new();
        index.build(Collection::Restricted, vec![Shape::Polygon(square(0.0, 0.0, 4.0))]);
        assert!(index.overlaps(Collection::Restricted, &Rect::new(1.0, 1.0, 2.0, 2.0), 0.0));
        assert!(!index.overlaps(Collection::Restricted, &Rect::new(5.0, 5.0, 6.0, 6.0), 0.0));
    }

    #[test]
    fn test_degenerate_geometries_are_skipped() {
        let mut index = SpatialIndex::new();
        index.build(
            Collection::Restricted,
            vec![
                Shape::Polygon(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]),
                Shape::Segment(Point::new(2.0, 2.0), Point::new(2.0, 2.0)),
                Shape::Polygon(square(0.0, 0.0, 2.0)),
            ],
        );
        assert_eq!(index.skipped_geometries(), 2);
        assert!(index.overlaps(Collection::Restricted, &Rect::new(0.0, 0.0, 1.0, 1.0), 0.0));
    }

    #[test]
    fn test_insert_unit_is_visible_immediately() {
        let mut index = SpatialIndex::new();
        index.insert_unit(Rect::new(0.0, 0.0, 2.0, 2.0));
        assert!(index.overlaps(Collection::Units, &Rect::new(1.0, 1.0, 3.0, 3.0), 0.0));
        index.insert_unit(Rect::new(10.0, 10.0, 12.0, 12.0));
        assert!(index.overlaps(Collection::Units, &Rect::new(11.0, 11.0, 13.0, 13.0), 0.0));
    }
}
