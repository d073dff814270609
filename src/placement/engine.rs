//! Greedy candidate-grid placement engine
//!
//! Processes specs largest-first over a jittered candidate grid, scoring
//! feasible candidates in parallel and committing the winner into the
//! run-owned spatial index so later specs see it as an obstacle.
//!
//! Placement never fails: infeasible specs are omitted and counted, and a
//! floor plan with no usable area yields an empty result.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::plan::{Collection, FloorPlan, Rect, Shape, SpatialIndex};

use super::config::PlacementParams;
use super::grid::candidate_grid;
use super::rows::assign_rows;
use super::scoring::score_candidate;
use super::specs::{generate_specs, sort_largest_first};
use super::types::{PlacedUnit, PlacementResult, UnitSpec};

/// Place units generated from the configured size mix.
pub fn place_units(plan: &FloorPlan, params: &PlacementParams) -> PlacementResult {
    let usable = plan.bounds.shrink(params.wall_clearance);
    if plan.bounds.is_degenerate() || usable.is_degenerate() {
        return PlacementResult::empty();
    }

    let mut rng = StdRng::seed_from_u64(params.seed);
    let target = params.resolve_target_count(usable.area());
    let specs = generate_specs(target, &params.mix, &mut rng);
    place_with_rng(plan, specs, params, &mut rng)
}

/// Place an explicit spec list (sorted largest-first by the engine).
pub fn place_specs(
    plan: &FloorPlan,
    specs: Vec<UnitSpec>,
    params: &PlacementParams,
) -> PlacementResult {
    let mut rng = StdRng::seed_from_u64(params.seed);
    place_with_rng(plan, specs, params, &mut rng)
}

fn place_with_rng(
    plan: &FloorPlan,
    mut specs: Vec<UnitSpec>,
    params: &PlacementParams,
    rng: &mut StdRng,
) -> PlacementResult {
    let start = std::time::Instant::now();

    let usable = plan.bounds.shrink(params.wall_clearance);
    if plan.bounds.is_degenerate() || usable.is_degenerate() || specs.is_empty() {
        return PlacementResult::empty();
    }

    sort_largest_first(&mut specs);

    let mut index = SpatialIndex::new();
    index.build(Collection::Walls, wall_segments(plan));
    index.build(Collection::Restricted, restricted_shapes(plan));

    let candidates = candidate_grid(&usable, specs.len(), rng);
    let mut used = vec![false; candidates.len()];
    let mut units: Vec<PlacedUnit> = Vec::new();
    let mut dropped = 0usize;

    for spec in &specs {
        // Feasibility filter + scoring over all unused candidates. The index
        // is frozen for the duration of the scan; only the commit below
        // writes to it (single-writer discipline).
        let best = candidates
            .par_iter()
            .enumerate()
            .filter(|(i, _)| !used[*i])
            .filter_map(|(i, pos)| {
                let rect = Rect::from_origin(pos.x, pos.y, spec.width, spec.height);
                if !usable.contains_rect(&rect) {
                    return None;
                }
                if index.overlaps(Collection::Restricted, &rect, 0.0) {
                    return None;
                }
                if index.overlaps(Collection::Units, &rect, params.overlap_tolerance) {
                    return None;
                }
                let score = score_candidate(*pos, spec, &usable, &index, params);
                Some((score, i))
            })
            // Highest score, lowest candidate index on ties: a total order,
            // so the parallel reduction is deterministic.
            .reduce_with(|a, b| {
                if b.0 > a.0 || (b.0 == a.0 && b.1 < a.1) {
                    b
                } else {
                    a
                }
            });

        match best {
            Some((_score, i)) => {
                let pos = candidates[i];
                used[i] = true;
                let rect = Rect::from_origin(pos.x, pos.y, spec.width, spec.height);
                index.insert_unit(rect);
                units.push(PlacedUnit {
                    id: units.len() as u32,
                    x: pos.x,
                    y: pos.y,
                    width: spec.width,
                    height: spec.height,
                    area: spec.area,
                    category: spec.category,
                    row_id: None,
                });
            }
            None => dropped += 1,
        }
    }

    let (units, rows) = assign_rows(units, params.row_threshold);

    eprintln!(
        "[Placement] placed {} of {} specs ({} dropped) in {:?}",
        units.len(),
        specs.len(),
        dropped,
        start.elapsed()
    );

    PlacementResult {
        units,
        rows,
        dropped_specs: dropped,
        skipped_geometries: index.skipped_geometries(),
    }
}

/// Explode wall polylines into indexable segments
fn wall_segments(plan: &FloorPlan) -> Vec<Shape> {
    let mut segments = Vec::new();
    for wall in &plan.walls {
        for pair in wall.points.windows(2) {
            segments.push(Shape::Segment(pair[0], pair[1]));
        }
    }
    segments
}

fn restricted_shapes(plan: &FloorPlan) -> Vec<Shape> {
    plan.restricted_areas
        .iter()
        .map(|p| Shape::Polygon(p.points.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{Point, Polygon};
    use crate::placement::types::SizeCategory;

    fn open_plan(w: f32, h: f32) -> FloorPlan {
        FloorPlan::new(Rect::new(0.0, 0.0, w, h))
    }

    #[test]
    fn test_degenerate_bounds_yield_empty_placement() {
        let plan = open_plan(0.0, 10.0);
        let result = place_units(&plan, &PlacementParams::default());
        assert!(result.units.is_empty());
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_zero_usable_area_after_clearance() {
        let plan = open_plan(1.0, 1.0);
        let params = PlacementParams { wall_clearance: 0.6, ..Default::default() };
        let result = place_units(&plan, &params);
        assert!(result.units.is_empty());
    }

    #[test]
    fn test_units_respect_restricted_zone() {
        let mut plan = open_plan(30.0, 20.0);
        plan.restricted_areas.push(Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(15.0, 0.0),
            Point::new(15.0, 20.0),
            Point::new(0.0, 20.0),
        ]));
        let params = PlacementParams { target_count: Some(6), ..Default::default() };
        let result = place_units(&plan, &params);
        let zone = Rect::new(0.0, 0.0, 15.0, 20.0);
        for unit in &result.units {
            assert!(
                unit.rect().intersection_area(&zone) < 1e-3,
                "unit {:?} intrudes into the restricted zone",
                unit
            );
        }
    }

    #[test]
    fn test_caller_specs_are_resorted_largest_first() {
        let plan = open_plan(40.0, 30.0);
        let mut specs = Vec::new();
        for _ in 0..4 {
            specs.push(UnitSpec::new(2.0, 1.5, SizeCategory::Small));
            specs.push(UnitSpec::new(5.0, 4.0, SizeCategory::XLarge));
        }
        let result = place_specs(&plan, specs, &PlacementParams::default());
        assert!(result.units.len() >= 2);
        // Specs commit in descending-area order, so ids follow that order
        for pair in result.units.windows(2) {
            assert!(pair[0].area >= pair[1].area);
        }
        assert_eq!(result.units[0].category, SizeCategory::XLarge);
    }
}
