//! De-duplicating fire set with an R-tree radius index.
//!
//! Fires are keyed by cell, not identity: registering a fire on a burning
//! cell is a no-op.  Insertion order is retained so iteration (and therefore
//! the order fires spread in) is deterministic.

use std::collections::HashSet;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use evac_core::Cell;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: the burning cell as an `[x, y]` point.
#[derive(Clone)]
struct FireEntry {
    point: [f64; 2],
    cell:  Cell,
}

impl FireEntry {
    fn new(cell: Cell) -> Self {
        Self { point: [cell.x as f64, cell.y as f64], cell }
    }
}

impl RTreeObject for FireEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for FireEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── FireSet ───────────────────────────────────────────────────────────────────

/// Every burning cell, in ignition order.
#[derive(Default)]
pub struct FireSet {
    order: Vec<Cell>,
    cells: HashSet<Cell>,
    index: RTree<FireEntry>,
}

impl FireSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `cell` as burning.  Returns `false` if it already was.
    pub fn insert(&mut self, cell: Cell) -> bool {
        if !self.cells.insert(cell) {
            return false;
        }
        self.order.push(cell);
        self.index.insert(FireEntry::new(cell));
        true
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// `true` if any fire is strictly closer than `radius` to `cell`.
    ///
    /// The R-tree query is inclusive of the radius, so candidates are
    /// re-checked with the strict integer comparison.
    pub fn any_within(&self, cell: Cell, radius: f32) -> bool {
        let r = radius as f64;
        self.index
            .locate_within_distance([cell.x as f64, cell.y as f64], r * r)
            .any(|entry| entry.cell.within(cell, radius))
    }

    /// Burning cells in ignition order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
