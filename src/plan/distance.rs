//! Distance and clipping algorithms for layout feasibility checks
//!
//! Contains point/segment distance, segment-in-rect clipping, triangle
//! clipping for polygon overlap measurement, and path length.

use super::types::{shoelace_area, Point, Rect};

/// Point-to-segment minimum distance
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let ab = [b.x - a.x, b.y - a.y];
    let ap = [p.x - a.x, p.y - a.y];
    let ab_len2 = ab[0] * ab[0] + ab[1] * ab[1];

    if ab_len2 < 1e-10 {
        // Degenerate segment
        return p.distance(&a);
    }

    let t = ((ap[0] * ab[0] + ap[1] * ab[1]) / ab_len2).clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * ab[0], a.y + t * ab[1]);
    p.distance(&closest)
}

/// Midpoint of two points
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Total polyline length over an ordered point list
pub fn path_length(points: &[Point]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    points
        .windows(2)
        .map(|pair| pair[0].distance(&pair[1]))
        .sum()
}

/// Length of the part of segment `a`-`b` that lies inside `rect`
/// (Liang-Barsky parametric clip)
pub fn segment_rect_clip_length(a: Point, b: Point, rect: &Rect) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    // (p, q) per clip plane: t crosses the plane at q / p
    let planes = [
        (-dx, a.x - rect.min_x),
        (dx, rect.max_x - a.x),
        (-dy, a.y - rect.min_y),
        (dy, rect.max_y - a.y),
    ];

    for (p, q) in planes {
        if p.abs() < 1e-10 {
            if q < 0.0 {
                return 0.0; // Parallel and outside
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return 0.0;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return 0.0;
            }
            t1 = t1.min(t);
        }
    }

    if t1 <= t0 {
        return 0.0;
    }
    (t1 - t0) * (dx * dx + dy * dy).sqrt()
}

/// Triangle with precomputed AABB for fast rejection
#[derive(Clone, Debug)]
pub struct Triangle {
    pub v0: Point,
    pub v1: Point,
    pub v2: Point,
    pub aabb_min: Point,
    pub aabb_max: Point,
}

impl Triangle {
    pub fn from_vertices(v0: Point, v1: Point, v2: Point) -> Self {
        Self {
            v0,
            v1,
            v2,
            aabb_min: Point::new(v0.x.min(v1.x).min(v2.x), v0.y.min(v1.y).min(v2.y)),
            aabb_max: Point::new(v0.x.max(v1.x).max(v2.x), v0.y.max(v1.y).max(v2.y)),
        }
    }

    pub fn area(&self) -> f32 {
        shoelace_area(&[self.v0, self.v1, self.v2]).abs()
    }

    /// Check containment using barycentric coordinates
    pub fn contains_point(&self, p: &Point) -> bool {
        let (x0, y0) = (self.v0.x, self.v0.y);
        let (x1, y1) = (self.v1.x, self.v1.y);
        let (x2, y2) = (self.v2.x, self.v2.y);
        let area = 0.5 * (-y1 * x2 + y0 * (-x1 + x2) + x0 * (y1 - y2) + x1 * y2);
        if area.abs() < 1e-10 {
            return false; // Degenerate triangle
        }
        let s = (y0 * x2 - x0 * y2 + (y2 - y0) * p.x + (x0 - x2) * p.y) / (2.0 * area);
        let t = (x0 * y1 - y0 * x1 + (y0 - y1) * p.x + (x1 - x0) * p.y) / (2.0 * area);
        s >= 0.0 && t >= 0.0 && (s + t) <= 1.0
    }

    /// Area of the triangle part lying inside `rect`
    pub fn clip_area_in_rect(&self, rect: &Rect) -> f32 {
        // AABB pre-filter
        if self.aabb_max.x <= rect.min_x
            || self.aabb_min.x >= rect.max_x
            || self.aabb_max.y <= rect.min_y
            || self.aabb_min.y >= rect.max_y
        {
            return 0.0;
        }
        let clipped = clip_ring_to_rect(&[self.v0, self.v1, self.v2], rect);
        shoelace_area(&clipped).abs()
    }
}

/// Sutherland-Hodgman clip of a convex-or-simple ring against a rect
fn clip_ring_to_rect(ring: &[Point], rect: &Rect) -> Vec<Point> {
    let mut pts = ring.to_vec();
    pts = clip_halfplane(&pts, |p| p.x >= rect.min_x, |a, b| cross_x(a, b, rect.min_x));
    pts = clip_halfplane(&pts, |p| p.x <= rect.max_x, |a, b| cross_x(a, b, rect.max_x));
    pts = clip_halfplane(&pts, |p| p.y >= rect.min_y, |a, b| cross_y(a, b, rect.min_y));
    pts = clip_halfplane(&pts, |p| p.y <= rect.max_y, |a, b| cross_y(a, b, rect.max_y));
    pts
}

fn clip_halfplane(
    ring: &[Point],
    inside: impl Fn(&Point) -> bool,
    intersect: impl Fn(&Point, &Point) -> Point,
) -> Vec<Point> {
    if ring.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(ring.len() + 2);
    for i in 0..ring.len() {
        let cur = ring[i];
        let prev = ring[(i + ring.len() - 1) % ring.len()];
        let cur_in = inside(&cur);
        let prev_in = inside(&prev);
        if cur_in {
            if !prev_in {
                out.push(intersect(&prev, &cur));
            }
            out.push(cur);
        } else if prev_in {
            out.push(intersect(&prev, &cur));
        }
    }
    out
}

// Only called for edges straddling the plane, so the denominator is non-zero.
fn cross_x(a: &Point, b: &Point, x: f32) -> Point {
    let t = (x - a.x) / (b.x - a.x);
    Point::new(x, a.y + t * (b.y - a.y))
}

fn cross_y(a: &Point, b: &Point, y: f32) -> Point {
    let t = (y - a.y) / (b.y - a.y);
    Point::new(a.x + t * (b.x - a.x), y)
}
