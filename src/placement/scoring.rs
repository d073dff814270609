//! Candidate scoring for the greedy placement search
//!
//! Scores are relative quality weights, not calibrated units; only their
//! ordering matters to the engine.

use crate::plan::{Collection, Point, Rect, SpatialIndex};

use super::config::{PlacementParams, ScoringStrategy};
use super::types::UnitSpec;

/// Weight of the centroid-proximity term in the balanced profile
const CENTER_WEIGHT: f32 = 0.3;

/// Reward / penalty applied by the even-spread term
const SPREAD_REWARD: f32 = 0.5;

/// Bonus for wall-adjacent candidates under `WallAdjacent`
const WALL_BONUS: f32 = 0.2;

/// Score a surviving candidate position for `spec`
///
/// `index` is the run's spatial index frozen at this point of the greedy
/// pass; scoring only reads it, so candidates can be evaluated in parallel.
pub fn score_candidate(
    pos: Point,
    spec: &UnitSpec,
    usable: &Rect,
    index: &SpatialIndex,
    params: &PlacementParams,
) -> f32 {
    let center = Point::new(pos.x + spec.width / 2.0, pos.y + spec.height / 2.0);

    match params.strategy {
        ScoringStrategy::Centered => center_score(&center, usable),
        ScoringStrategy::Balanced => {
            1.0 + CENTER_WEIGHT * center_score(&center, usable)
                + spread_score(&center, index, params.min_spacing)
        }
        ScoringStrategy::WallAdjacent => {
            1.0 + CENTER_WEIGHT * center_score(&center, usable)
                + spread_score(&center, index, params.min_spacing)
                + wall_score(&center, spec, index, params.wall_clearance)
        }
    }
}

/// Normalized centroid proximity: 1.0 at the floor-plan center, falling
/// linearly with Manhattan distance
fn center_score(center: &Point, usable: &Rect) -> f32 {
    let c = usable.center();
    let span = usable.width() + usable.height();
    if span <= 0.0 {
        return 0.0;
    }
    1.0 - ((center.x - c.x).abs() + (center.y - c.y).abs()) / span
}

/// Even-spread term: reward clear space around the candidate up to a
/// ceiling of twice the preferred spacing, penalize crowding below it
fn spread_score(center: &Point, index: &SpatialIndex, min_spacing: f32) -> f32 {
    let ceiling = min_spacing * 2.0;
    let nearby = index.query_nearby(Collection::Units, *center, ceiling);
    if nearby.is_empty() {
        // Nothing within the ceiling: maximal clearance
        return SPREAD_REWARD;
    }
    let min_d = nearby
        .iter()
        .map(|s| s.distance_to(center))
        .fold(f32::MAX, f32::min);
    if min_d < min_spacing {
        -SPREAD_REWARD
    } else {
        0.0
    }
}

/// Wall-adjacency bonus: any wall within reach of the unit footprint
fn wall_score(center: &Point, spec: &UnitSpec, index: &SpatialIndex, wall_clearance: f32) -> f32 {
    let reach = wall_clearance + spec.width.max(spec.height);
    if index.query_nearby(Collection::Walls, *center, reach).is_empty() {
        0.0
    } else {
        WALL_BONUS
    }
}
