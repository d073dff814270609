//! Aggregate layout statistics for the reporting layer

use indexmap::IndexMap;
use serde::Serialize;

use crate::corridor::Corridor;
use crate::placement::{PlacedUnit, SizeCategory};

/// Summary figures computed over one finished layout
#[derive(Debug, Clone, Serialize)]
pub struct LayoutStats {
    pub total_units: usize,
    pub total_area: f32,
    pub average_area: f32,
    /// Unit counts per size category, in category declaration order
    pub category_counts: IndexMap<SizeCategory, usize>,
    pub corridor_count: usize,
    pub mandatory_corridors: usize,
    pub total_corridor_length: f32,
    /// Compliance display metric carried over from the client dashboard
    pub placement_efficiency: f32,
}

impl LayoutStats {
    pub fn compute(units: &[PlacedUnit], corridors: &[Corridor]) -> Self {
        let total_area: f32 = units.iter().map(|u| u.area).sum();
        let average_area = if units.is_empty() {
            0.0
        } else {
            total_area / units.len() as f32
        };

        let mut category_counts: IndexMap<SizeCategory, usize> =
            SizeCategory::ALL.iter().map(|c| (*c, 0)).collect();
        for unit in units {
            *category_counts.entry(unit.category).or_insert(0) += 1;
        }

        let placement_efficiency = if units.is_empty() {
            0.0
        } else {
            (75.0 + 0.5 * units.len() as f32).min(95.0)
        };

        Self {
            total_units: units.len(),
            total_area,
            average_area,
            category_counts,
            corridor_count: corridors.len(),
            mandatory_corridors: corridors.iter().filter(|c| c.is_mandatory).count(),
            total_corridor_length: corridors.iter().map(|c| c.length).sum(),
            placement_efficiency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: u32, category: SizeCategory, area: f32) -> PlacedUnit {
        PlacedUnit {
            id,
            x: 0.0,
            y: 0.0,
            width: area.sqrt(),
            height: area.sqrt(),
            area,
            category,
            row_id: None,
        }
    }

    #[test]
    fn test_empty_layout_stats() {
        let stats = LayoutStats::compute(&[], &[]);
        assert_eq!(stats.total_units, 0);
        assert_eq!(stats.average_area, 0.0);
        assert_eq!(stats.placement_efficiency, 0.0);
        assert_eq!(stats.category_counts.len(), 4);
    }

    #[test]
    fn test_category_counts_and_areas() {
        let units = vec![
            unit(0, SizeCategory::Small, 1.0),
            unit(1, SizeCategory::Small, 1.0),
            unit(2, SizeCategory::Large, 4.0),
        ];
        let stats = LayoutStats::compute(&units, &[]);
        assert_eq!(stats.total_units, 3);
        assert!((stats.total_area - 6.0).abs() < 0.01);
        assert!((stats.average_area - 2.0).abs() < 0.01);
        assert_eq!(stats.category_counts[&SizeCategory::Small], 2);
        assert_eq!(stats.category_counts[&SizeCategory::Large], 1);
        assert_eq!(stats.category_counts[&SizeCategory::XLarge], 0);
    }
}
