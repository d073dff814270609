//! Corridor network synthesis
//!
//! One-shot multi-stage pipeline over a finished placement:
//! main corridors from every entrance to every row, mandatory facing-row
//! corridors, secondary corridors restoring connectivity across unit
//! groups, then redundancy pruning with mandatory precedence.

use crate::placement::{PlacedUnit, Row};
use crate::plan::{midpoint, FloorPlan, Point};

use super::graph::UnitGraph;
use super::prune::prune_corridors;
use super::types::{Corridor, CorridorKind, CorridorParams};

/// Generate the pruned corridor network for one placement.
pub fn generate_corridors(
    plan: &FloorPlan,
    units: &[PlacedUnit],
    rows: &[Row],
    params: &CorridorParams,
) -> Vec<Corridor> {
    let start = std::time::Instant::now();

    if units.is_empty() || rows.is_empty() {
        return Vec::new();
    }

    let mut corridors = Vec::new();
    let mut next_id = 0u32;

    // Stage 1: main corridors, entrance to row center
    for entrance in &plan.entrances {
        for row in rows {
            let mut corridor = Corridor::new(
                next_id,
                CorridorKind::Main,
                vec![entrance.position, row.center],
                params.main_width(),
            );
            corridor.entrance_id = Some(entrance.id);
            corridor.row_ids = vec![row.id];
            corridors.push(corridor);
            next_id += 1;
        }
    }

    // Stage 2: facing corridors between row pairs (mandatory client rule)
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            if !rows_facing(&rows[i], &rows[j], params) {
                continue;
            }
            let mid = midpoint(rows[i].center, rows[j].center);
            let mut corridor = Corridor::new(
                next_id,
                CorridorKind::Facing,
                vec![rows[i].center, mid, rows[j].center],
                params.corridor_width,
            );
            corridor.row_ids = vec![rows[i].id, rows[j].id];
            corridors.push(corridor);
            next_id += 1;
        }
    }

    // Stage 3: secondary corridors between disconnected unit groups
    let graph = UnitGraph::new(units);
    let components = graph.components(&corridors);
    for pair in components.windows(2) {
        if let Some((a, b)) = closest_cross_pair(units, &pair[0], &pair[1]) {
            corridors.push(Corridor::new(
                next_id,
                CorridorKind::Secondary,
                vec![units[a].center(), units[b].center()],
                params.secondary_width(),
            ));
            next_id += 1;
        }
    }

    // Stage 4: redundancy pruning
    let generated = corridors.len();
    let pruned = prune_corridors(corridors, params);

    eprintln!(
        "[Corridors] kept {} of {} corridors ({} mandatory) in {:?}",
        pruned.len(),
        generated,
        pruned.iter().filter(|c| c.is_mandatory).count(),
        start.elapsed()
    );

    pruned
}

/// Rows aligned on the same horizontal band but spatially separated:
/// not the same row, so a connecting corridor is required
fn rows_facing(a: &Row, b: &Row, params: &CorridorParams) -> bool {
    let y_gap = (a.center.y - b.center.y).abs();
    let x_gap = (a.center.x - b.center.x).abs();
    y_gap <= params.facing_max_y_gap && x_gap >= params.facing_min_x_gap
}

/// Closest unit pair across two components, by center distance
fn closest_cross_pair(units: &[PlacedUnit], comp_a: &[usize], comp_b: &[usize]) -> Option<(usize, usize)> {
    let mut best: Option<(f32, usize, usize)> = None;
    for &a in comp_a {
        for &b in comp_b {
            let d = units[a].center().distance(&units[b].center());
            match best {
                Some((bd, _, _)) if bd <= d => {}
                _ => best = Some((d, a, b)),
            }
        }
    }
    best.map(|(_, a, b)| (a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::SizeCategory;
    use crate::plan::{Entrance, Rect};

    fn unit(id: u32, x: f32, y: f32, row_id: u32) -> PlacedUnit {
        PlacedUnit {
            id,
            x,
            y,
            width: 2.0,
            height: 2.0,
            area: 4.0,
            category: SizeCategory::Medium,
            row_id: Some(row_id),
        }
    }

    fn row(id: u32, unit_ids: Vec<u32>, cx: f32, cy: f32) -> Row {
        Row { id, unit_ids, center: Point::new(cx, cy) }
    }

    #[test]
    fn test_facing_rule_thresholds() {
        let params = CorridorParams::default();
        let a = row(0, vec![0], 0.0, 5.0);
        // Aligned and separated: facing
        assert!(rows_facing(&a, &row(1, vec![1], 10.0, 6.0), &params));
        // Too far apart vertically
        assert!(!rows_facing(&a, &row(1, vec![1], 10.0, 11.0), &params));
        // Same horizontal position: the same band, not a facing pair
        assert!(!rows_facing(&a, &row(1, vec![1], 1.0, 6.0), &params));
    }

    #[test]
    fn test_main_corridors_cover_every_entrance_row_pair() {
        let mut plan = FloorPlan::new(Rect::new(0.0, 0.0, 30.0, 20.0));
        plan.entrances.push(Entrance::at(0, 15.0, 0.0));
        let units = vec![unit(0, 4.0, 4.0, 0), unit(1, 4.0, 14.0, 1)];
        let rows = vec![row(0, vec![0], 5.0, 5.0), row(1, vec![1], 5.0, 15.0)];

        let corridors = generate_corridors(&plan, &units, &rows, &CorridorParams::default());
        for r in &rows {
            assert!(
                corridors.iter().any(|c| c.kind == CorridorKind::Main
                    && c.entrance_id == Some(0)
                    && c.row_ids == vec![r.id]),
                "missing main corridor to row {}",
                r.id
            );
        }
    }

    #[test]
    fn test_facing_corridor_has_three_point_path() {
        let plan = FloorPlan::new(Rect::new(0.0, 0.0, 40.0, 20.0));
        let units = vec![unit(0, 4.0, 9.0, 0), unit(1, 30.0, 9.0, 1)];
        let rows = vec![row(0, vec![0], 5.0, 10.0), row(1, vec![1], 31.0, 10.0)];

        let corridors = generate_corridors(&plan, &units, &rows, &CorridorParams::default());
        let facing: Vec<_> = corridors
            .iter()
            .filter(|c| c.kind == CorridorKind::Facing)
            .collect();
        assert_eq!(facing.len(), 1);
        assert_eq!(facing[0].path.len(), 3);
        assert_eq!(facing[0].path[1], Point::new(18.0, 10.0));
        assert!(facing[0].is_mandatory);
    }

    #[test]
    fn test_no_units_no_corridors() {
        let plan = FloorPlan::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(generate_corridors(&plan, &[], &[], &CorridorParams::default()).is_empty());
    }
}
