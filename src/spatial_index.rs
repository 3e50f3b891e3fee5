//! R-tree spatial index over committed rectangles.
//!
//! Hit testing on every mouse move scans the rectangle collection; the index
//! cuts that to O(log n) by prefiltering candidates. Entries are keyed by
//! insertion position, so callers can resolve candidates in collection order
//! and keep the earlier-created-wins tie-break.

use rstar::{AABB, RTree, RTreeObject};

use crate::types::GridRectangle;

/// Bounding box of one committed rectangle, keyed by its insertion index.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub rect_id: u64,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(rect_id: u64, rect: &GridRectangle) -> Self {
        let bounds = rect.bounds();
        Self {
            rect_id,
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            max_x: bounds.max_x,
            max_y: bounds.max_y,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

/// Spatial index for committed rectangles.
///
/// The committed collection is append-only between clears, so the index only
/// supports `insert` and `clear`. Candidate ids come back unsorted; callers
/// sort before resolving so insertion order stays the tie-break.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    len: usize,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a newly committed rectangle under its insertion position.
    pub fn insert(&mut self, rect_id: u64, rect: &GridRectangle) {
        self.tree.insert(SpatialEntry::new(rect_id, rect));
        self.len += 1;
    }

    /// Ids of rectangles whose bounds contain the point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<u64> {
        let envelope = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.rect_id)
            .collect()
    }

    /// Ids of rectangles whose bounds, inflated by `tolerance`, contain the
    /// point. Used for border-band hit testing, where a hit may lie just
    /// outside the rectangle proper.
    pub fn query_point_with_tolerance(&self, x: f32, y: f32, tolerance: f32) -> Vec<u64> {
        let envelope = AABB::from_corners([x - tolerance, y - tolerance], [x + tolerance, y + tolerance]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.rect_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.len = 0;
    }
}
