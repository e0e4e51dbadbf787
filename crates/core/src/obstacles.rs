//! Obstacle registry and collision marks.
//!
//! Debris registers its on-screen bounding box here every tick it is drawn;
//! projectiles query the registry and mark whatever they hit. The owning debris
//! reads the mark on its next resumption and removes itself.

use std::collections::{BTreeMap, BTreeSet};

/// Stable identifier of one debris piece's obstacle box.
///
/// Ids come from a session counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObstacleId(u64);

impl ObstacleId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Axis-aligned bounding box in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub row: i32,
    pub column: i32,
    pub rows_size: i32,
    pub columns_size: i32,
}

impl Obstacle {
    pub fn new(row: i32, column: i32, rows_size: i32, columns_size: i32) -> Self {
        Self {
            row,
            column,
            rows_size,
            columns_size,
        }
    }

    /// True when the cell `(row, column)` lies inside the box.
    pub fn contains(&self, row: i32, column: i32) -> bool {
        self.row <= row
            && row < self.row + self.rows_size
            && self.column <= column
            && column < self.column + self.columns_size
    }
}

/// Live obstacle boxes, at most one per id.
#[derive(Debug, Clone, Default)]
pub struct ObstacleRegistry {
    next_id: u64,
    boxes: BTreeMap<ObstacleId, Obstacle>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a fresh id. Nothing is registered until [`Self::upsert`].
    pub fn allocate(&mut self) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert or replace the box for `id`.
    pub fn upsert(&mut self, id: ObstacleId, obstacle: Obstacle) {
        self.boxes.insert(id, obstacle);
    }

    pub fn remove(&mut self, id: ObstacleId) -> Option<Obstacle> {
        self.boxes.remove(&id)
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.boxes.get(&id)
    }

    /// First box (in id order) containing `(row, column)`.
    pub fn find_at(&self, row: i32, column: i32) -> Option<ObstacleId> {
        self.boxes
            .iter()
            .find(|(_, obstacle)| obstacle.contains(row, column))
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle)> {
        self.boxes.iter().map(|(id, obstacle)| (*id, obstacle))
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }
}

/// Obstacles hit by a projectile and not yet consumed by their debris.
#[derive(Debug, Clone, Default)]
pub struct CollisionMarks {
    marked: BTreeSet<ObstacleId>,
}

impl CollisionMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as hit. Returns `false` if it was already marked.
    pub fn mark(&mut self, id: ObstacleId) -> bool {
        self.marked.insert(id)
    }

    pub fn is_marked(&self, id: ObstacleId) -> bool {
        self.marked.contains(&id)
    }

    /// Remove the mark for `id`, returning whether it was present.
    pub fn consume(&mut self, id: ObstacleId) -> bool {
        self.marked.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    pub fn clear(&mut self) {
        self.marked.clear();
    }
}
