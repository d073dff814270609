//! Redundancy pruning over the generated corridor set
//!
//! Candidate overlaps are found through an R-tree over corridor endpoint
//! envelopes rather than pairwise scanning. Two corridors overlap when both
//! endpoint pairs match within the merge distance (in either orientation).
//! A mandatory corridor always beats a non-mandatory one; two non-mandatory
//! corridors resolve to the longer, first-seen on ties. Mandatory corridors
//! are never pruned against each other, so every one of them survives.

use rstar::{RTree, RTreeObject, AABB};

use crate::plan::Point;

use super::types::{Corridor, CorridorParams};

/// Endpoint span of one kept corridor, indexed for overlap candidates
struct EndpointSpan {
    first: Point,
    last: Point,
    slot: usize,
    margin: f32,
}

impl RTreeObject for EndpointSpan {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [
                self.first.x.min(self.last.x) - self.margin,
                self.first.y.min(self.last.y) - self.margin,
            ],
            [
                self.first.x.max(self.last.x) + self.margin,
                self.first.y.max(self.last.y) + self.margin,
            ],
        )
    }
}

/// Both endpoint pairs within `threshold`, direct or reversed
fn endpoints_match(a: (Point, Point), b: (Point, Point), threshold: f32) -> bool {
    (a.0.distance(&b.0) < threshold && a.1.distance(&b.1) < threshold)
        || (a.0.distance(&b.1) < threshold && a.1.distance(&b.0) < threshold)
}

/// Prune short and redundant corridors, preserving every mandatory one.
pub fn prune_corridors(corridors: Vec<Corridor>, params: &CorridorParams) -> Vec<Corridor> {
    // Length cull first; mandatory corridors are exempt so the preservation
    // guarantee holds even for degenerate row geometry.
    let corridors: Vec<Corridor> = corridors
        .into_iter()
        .filter(|c| c.is_mandatory || c.length >= params.min_corridor_length)
        .collect();

    let threshold = params.endpoint_merge_distance;
    let mut kept: Vec<Option<Corridor>> = Vec::with_capacity(corridors.len());
    let mut tree: RTree<EndpointSpan> = RTree::new();

    for corridor in corridors {
        let Some(ends) = corridor.endpoints() else {
            continue;
        };

        let span = EndpointSpan {
            first: ends.0,
            last: ends.1,
            slot: kept.len(),
            margin: threshold,
        };

        let mut redundant = false;
        let mut evict: Option<usize> = None;
        for other in tree.locate_in_envelope_intersecting(&span.envelope()) {
            // Evicted slots leave stale tree entries behind; skip them.
            let Some(existing) = kept[other.slot].as_ref() else {
                continue;
            };
            let Some(other_ends) = existing.endpoints() else {
                continue;
            };
            if !endpoints_match(ends, other_ends, threshold) {
                continue;
            }

            if corridor.is_mandatory && existing.is_mandatory {
                // Both required: keep both.
                continue;
            } else if corridor.is_mandatory {
                evict = Some(other.slot);
            } else if existing.is_mandatory {
                redundant = true;
            } else if corridor.length > existing.length {
                evict = Some(other.slot);
            } else {
                redundant = true;
            }
            break;
        }

        if redundant {
            continue;
        }
        if let Some(slot) = evict {
            kept[slot] = None;
        }
        kept.push(Some(corridor));
        tree.insert(span);
    }

    kept.into_iter().flatten().collect()
}
