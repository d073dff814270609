//! Jittered candidate-position grid for the placement search

use rand::seq::SliceRandom;
use rand::Rng;

use crate::plan::{Point, Rect};

/// Fraction of the grid spacing used as per-cell jitter
const JITTER_FRACTION: f32 = 0.2;

/// Oversampling factor: cell count targets ~3x the requested unit count
const OVERSAMPLE: usize = 3;

/// Generate candidate lower-left positions over the usable rect.
///
/// Spacing is chosen so the cell count lands near `OVERSAMPLE * target`;
/// each cell gets a small random offset to avoid axis-aligned clustering
/// artifacts, and the result is shuffled so the greedy pass does not sweep
/// the floor in raster order.
pub fn candidate_grid(usable: &Rect, target_count: usize, rng: &mut impl Rng) -> Vec<Point> {
    if usable.is_degenerate() || target_count == 0 {
        return Vec::new();
    }

    let spacing = (usable.area() / (target_count * OVERSAMPLE) as f32).sqrt();
    if !(spacing > f32::EPSILON) {
        return Vec::new();
    }
    let jitter = spacing * JITTER_FRACTION;

    let mut points = Vec::new();
    let mut x = usable.min_x + spacing;
    while x < usable.max_x - spacing {
        let mut y = usable.min_y + spacing;
        while y < usable.max_y - spacing {
            let dx = rng.gen_range(-jitter..jitter);
            let dy = rng.gen_range(-jitter..jitter);
            points.push(Point::new(x + dx, y + dy));
            y += spacing;
        }
        x += spacing;
    }

    points.shuffle(rng);
    points.truncate(target_count * OVERSAMPLE);
    points
}
