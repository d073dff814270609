//! Unit connectivity graph over corridor endpoints
//!
//! Nodes are placed units; an edge exists where a corridor's endpoints map
//! (by nearest center) to a pair of units. Connected components drive the
//! secondary-corridor stage and the connectivity property checks.

use indexmap::IndexMap;
use petgraph::unionfind::UnionFind;

use crate::placement::PlacedUnit;
use crate::plan::Point;

use super::types::Corridor;

pub struct UnitGraph<'a> {
    units: &'a [PlacedUnit],
}

impl<'a> UnitGraph<'a> {
    pub fn new(units: &'a [PlacedUnit]) -> Self {
        Self { units }
    }

    /// Nearest unit (by center distance) to a point
    pub fn nearest_unit(&self, p: Point) -> Option<&PlacedUnit> {
        self.units
            .iter()
            .min_by(|a, b| {
                a.center()
                    .distance(&p)
                    .partial_cmp(&b.center().distance(&p))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Connected components of the unit graph induced by `corridors`,
    /// each component listing unit indices in first-seen order
    pub fn components(&self, corridors: &[Corridor]) -> Vec<Vec<usize>> {
        if self.units.is_empty() {
            return Vec::new();
        }

        let mut uf: UnionFind<usize> = UnionFind::new(self.units.len());
        for corridor in corridors {
            let Some((first, last)) = corridor.endpoints() else {
                continue;
            };
            let (Some(a), Some(b)) = (self.nearest_index(first), self.nearest_index(last)) else {
                continue;
            };
            uf.union(a, b);
        }

        // Group by representative, preserving unit order for determinism
        let mut groups: IndexMap<usize, Vec<usize>> = IndexMap::new();
        for i in 0..self.units.len() {
            groups.entry(uf.find(i)).or_default().push(i);
        }
        groups.into_values().collect()
    }

    fn nearest_index(&self, p: Point) -> Option<usize> {
        let mut best: Option<(f32, usize)> = None;
        for (i, unit) in self.units.iter().enumerate() {
            let d = unit.center().distance(&p);
            match best {
                Some((bd, _)) if bd <= d => {}
                _ => best = Some((d, i)),
            }
        }
        best.map(|(_, i)| i)
    }
}
