use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::cell::{Cell, Corner};
use super::direction::Direction;
use crate::error::{GeometryError, Result};

/// A directed unit step between two neighbouring corners.
///
/// Identity is the `(from, to)` pair; the direction is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    from: Corner,
    to: Corner,
}

impl Edge {
    /// Creates an edge between two corners.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the corners coincide or are not
    /// one axis-aligned unit step apart.
    pub fn new(from: Corner, to: Corner) -> Result<Self> {
        if from == to {
            return Err(GeometryError::Degenerate(format!(
                "edge from ({}, {}) to itself",
                from.x, from.y
            ))
            .into());
        }
        let step = to
            .x
            .checked_sub(from.x)
            .zip(to.y.checked_sub(from.y))
            .and_then(|(dx, dy)| Direction::from_step(dx, dy));
        if step.is_none() {
            return Err(GeometryError::Degenerate(format!(
                "edge ({}, {}) -> ({}, {}) is not a unit lattice step",
                from.x, from.y, to.x, to.y
            ))
            .into());
        }
        Ok(Self { from, to })
    }

    /// Creates the edge leaving `from` one step in `direction`.
    #[must_use]
    pub fn step(from: Corner, direction: Direction) -> Self {
        Self {
            from,
            to: from.step(direction),
        }
    }

    /// Start corner.
    #[must_use]
    pub const fn from(self) -> Corner {
        self.from
    }

    /// End corner.
    #[must_use]
    pub const fn to(self) -> Corner {
        self.to
    }

    /// Direction of travel from `from` to `to`.
    #[must_use]
    pub const fn direction(self) -> Direction {
        if self.from.x == self.to.x {
            if self.from.y > self.to.y {
                Direction::Down
            } else {
                Direction::Up
            }
        } else if self.from.x > self.to.x {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// The same edge walked the other way.
    #[must_use]
    pub const fn flip(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// Outgoing boundary edges of one corner, one slot per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionSlots {
    slots: [Option<Edge>; 4],
}

impl DirectionSlots {
    /// Stores an edge in its direction slot, returning whatever was there.
    pub fn insert(&mut self, edge: Edge) -> Option<Edge> {
        self.slots[edge.direction().index()].replace(edge)
    }

    /// Returns the edge leaving in `direction`, if any.
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<Edge> {
        self.slots[direction.index()]
    }

    /// Removes and returns the edge leaving in `direction`.
    pub fn take(&mut self, direction: Direction) -> Option<Edge> {
        self.slots[direction.index()].take()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

/// Boundary edges of a cell set, keyed by start corner.
///
/// Corners are kept in lexicographic order so the first key always lies on
/// the outermost remaining ring. The index is drained by the contour tracer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryIndex {
    corners: BTreeMap<Corner, DirectionSlots>,
}

impl BoundaryIndex {
    /// Builds the boundary index of a cell set.
    ///
    /// Every cell contributes its four edges in clockwise order. Edges whose
    /// flip was also contributed are shared by two cells and cancel out.
    ///
    /// # Panics
    ///
    /// Panics if two boundary edges leave the same corner in the same
    /// direction, which deduplicated cells cannot produce.
    #[must_use]
    pub fn build(cells: &BTreeSet<Cell>) -> Self {
        let mut edges = HashSet::with_capacity(cells.len() * 4);
        for cell in cells {
            let corners = cell.corners();
            for i in 0..4 {
                let from = corners[i];
                let to = corners[(i + 1) % 4];
                edges.insert(Edge { from, to });
            }
        }

        let mut index = Self::default();
        for edge in edges.iter().filter(|e| !edges.contains(&e.flip())) {
            let previous = index.corners.entry(edge.from).or_default().insert(*edge);
            assert!(
                previous.is_none(),
                "duplicate boundary edge leaving ({}, {}) {:?}",
                edge.from.x,
                edge.from.y,
                edge.direction()
            );
        }

        tracing::trace!(
            cells = cells.len(),
            edges = edges.len(),
            boundary = index.edge_count(),
            "built boundary index"
        );
        index
    }

    /// The smallest corner that still has outgoing edges.
    #[must_use]
    pub fn first_corner(&self) -> Option<Corner> {
        self.corners.first_key_value().map(|(corner, _)| *corner)
    }

    /// Outgoing edges of a corner.
    #[must_use]
    pub fn slots(&self, corner: Corner) -> Option<&DirectionSlots> {
        self.corners.get(&corner)
    }

    /// Mutable access to the outgoing edges of a corner.
    pub fn slots_mut(&mut self, corner: Corner) -> Option<&mut DirectionSlots> {
        self.corners.get_mut(&corner)
    }

    /// Drops corners whose edges have all been consumed.
    pub fn prune_empty(&mut self) {
        self.corners.retain(|_, slots| !slots.is_empty());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corners.values().all(DirectionSlots::is_empty)
    }

    /// Number of corners with at least one entry (consumed or not).
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// Number of remaining boundary edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.corners.values().map(DirectionSlots::len).sum()
    }

    /// Iterates over all remaining boundary edges in corner order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.corners
            .values()
            .flat_map(|slots| Direction::ALL.into_iter().filter_map(|d| slots.get(d)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CheeseError;

    fn set(cells: &[(i32, i32)]) -> BTreeSet<Cell> {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn edge_direction_and_flip() {
        let e = Edge::new(Corner::new(0, 0), Corner::new(1, 0)).unwrap();
        assert_eq!(e.direction(), Direction::Right);
        assert_eq!(e.flip().direction(), Direction::Left);
        assert_eq!(e.flip().flip(), e);
        assert_eq!(Edge::step(Corner::new(2, 2), Direction::Down).to(), Corner::new(2, 1));
    }

    #[test]
    fn degenerate_edge_rejected() {
        let c = Corner::new(4, 4);
        let err = Edge::new(c, c).unwrap_err();
        assert!(matches!(err, CheeseError::Geometry(GeometryError::Degenerate(_))));
        assert!(Edge::new(c, Corner::new(6, 4)).is_err());
        assert!(Edge::new(c, Corner::new(5, 5)).is_err());
        assert!(Edge::new(Corner::new(i64::MIN, 0), Corner::new(i64::MAX, 0)).is_err());
    }

    #[test]
    fn single_cell_keeps_all_edges() {
        let index = BoundaryIndex::build(&set(&[(0, 0)]));
        assert_eq!(index.edge_count(), 4);
        assert_eq!(index.corner_count(), 4);
        assert_eq!(index.first_corner(), Some(Corner::new(0, 0)));
        let slots = index.slots(Corner::new(0, 0)).unwrap();
        assert_eq!(slots.len(), 1);
        assert!(slots.get(Direction::Right).is_some());
    }

    #[test]
    fn shared_edges_cancel() {
        let index = BoundaryIndex::build(&set(&[(0, 0), (1, 0)]));
        // 8 emitted, the shared vertical pair cancels.
        assert_eq!(index.edge_count(), 6);
        assert!(index
            .edges()
            .all(|e| !(e.from().x == 1 && e.to().x == 1)));
    }

    #[test]
    fn two_by_two_block_boundary() {
        let index = BoundaryIndex::build(&set(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
        assert_eq!(index.edge_count(), 8);
        assert!(index.slots(Corner::new(1, 1)).is_none());
    }

    #[test]
    fn ring_keeps_hole_edges() {
        let index = BoundaryIndex::build(&set(&[
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ]));
        // 12 outer unit edges + 4 around the missing centre.
        assert_eq!(index.edge_count(), 16);
        let hole_start = index.slots(Corner::new(0, 0)).unwrap();
        assert!(hole_start.get(Direction::Up).is_some());
    }

    #[test]
    fn diagonal_touch_shares_corner() {
        let index = BoundaryIndex::build(&set(&[(0, 0), (1, 1)]));
        assert_eq!(index.edge_count(), 8);
        assert_eq!(index.slots(Corner::new(1, 1)).unwrap().len(), 2);
    }

    #[test]
    fn prune_drops_consumed_corners() {
        let mut index = BoundaryIndex::build(&set(&[(0, 0)]));
        let slots = index.slots_mut(Corner::new(0, 0)).unwrap();
        assert!(slots.take(Direction::Right).is_some());
        assert!(slots.take(Direction::Right).is_none());
        assert_eq!(index.corner_count(), 4);
        index.prune_empty();
        assert_eq!(index.corner_count(), 3);
        assert_eq!(index.first_corner(), Some(Corner::new(0, 1)));
    }
}
