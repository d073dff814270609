//! Row detection: clustering placed units by vertical center

use std::collections::HashMap;

use crate::plan::Point;

use super::types::{PlacedUnit, Row};

/// Partition units into rows by vertical-center proximity.
///
/// Units are visited in ascending vertical-center order; a unit joins the
/// open row when its center is within `row_threshold` of the row's running
/// mean, otherwise the row closes and a new one opens. Single left-to-right
/// pass, deterministic and order-stable for a fixed input list.
pub fn detect_rows(units: &[PlacedUnit], row_threshold: f32) -> Vec<Row> {
    if units.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..units.len()).collect();
    order.sort_by(|&a, &b| {
        units[a]
            .center()
            .y
            .partial_cmp(&units[b].center().y)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut rows = Vec::new();
    let mut current = vec![order[0]];
    let mut mean_y = units[order[0]].center().y;

    for &i in &order[1..] {
        let cy = units[i].center().y;
        if (cy - mean_y).abs() <= row_threshold {
            current.push(i);
            // Running mean over the open row
            mean_y += (cy - mean_y) / current.len() as f32;
        } else {
            rows.push(close_row(rows.len() as u32, &current, units));
            current = vec![i];
            mean_y = cy;
        }
    }
    rows.push(close_row(rows.len() as u32, &current, units));

    rows
}

fn close_row(id: u32, members: &[usize], units: &[PlacedUnit]) -> Row {
    let n = members.len() as f32;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for &i in members {
        let c = units[i].center();
        cx += c.x;
        cy += c.y;
    }
    Row {
        id,
        unit_ids: members.iter().map(|&i| units[i].id).collect(),
        center: Point::new(cx / n, cy / n),
    }
}

/// Detect rows and re-emit the units with `row_id` stamped.
///
/// Placed units are immutable values, so the input list is consumed and a
/// new one returned.
pub fn assign_rows(units: Vec<PlacedUnit>, row_threshold: f32) -> (Vec<PlacedUnit>, Vec<Row>) {
    let rows = detect_rows(&units, row_threshold);

    let mut row_of: HashMap<u32, u32> = HashMap::new();
    for row in &rows {
        for &unit_id in &row.unit_ids {
            row_of.insert(unit_id, row.id);
        }
    }

    let units = units
        .into_iter()
        .map(|mut unit| {
            unit.row_id = row_of.get(&unit.id).copied();
            unit
        })
        .collect();

    (units, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::types::SizeCategory;

    fn unit(id: u32, x: f32, y: f32) -> PlacedUnit {
        PlacedUnit {
            id,
            x,
            y,
            width: 2.0,
            height: 2.0,
            area: 4.0,
            category: SizeCategory::Medium,
            row_id: None,
        }
    }

    #[test]
    fn test_close_units_share_a_row() {
        let units = vec![unit(0, 0.0, 0.0), unit(1, 5.0, 0.5), unit(2, 10.0, 1.0)];
        let rows = detect_rows(&units, 3.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].unit_ids.len(), 3);
    }

    #[test]
    fn test_distant_units_split_rows() {
        let units = vec![unit(0, 0.0, 0.0), unit(1, 0.0, 10.0), unit(2, 5.0, 10.5)];
        let rows = detect_rows(&units, 3.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].unit_ids, vec![0]);
        assert_eq!(rows[1].unit_ids, vec![1, 2]);
    }

    #[test]
    fn test_single_unit_forms_a_row() {
        let units = vec![unit(0, 3.0, 3.0)];
        let rows = detect_rows(&units, 3.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].unit_ids, vec![0]);
    }

    #[test]
    fn test_assign_rows_partitions_exactly_once() {
        let units = vec![
            unit(0, 0.0, 0.0),
            unit(1, 4.0, 0.2),
            unit(2, 0.0, 8.0),
            unit(3, 4.0, 8.4),
        ];
        let (stamped, rows) = assign_rows(units, 3.0);

        // Every unit belongs to exactly one row
        let mut seen = std::collections::HashSet::new();
        for row in &rows {
            for &id in &row.unit_ids {
                assert!(seen.insert(id), "unit {} appears in two rows", id);
            }
        }
        assert_eq!(seen.len(), stamped.len());
        for u in &stamped {
            assert!(u.row_id.is_some());
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(detect_rows(&[], 3.0).is_empty());
    }
}
