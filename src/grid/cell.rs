use super::direction::Direction;

/// One unit square of the grid, identified by its minimum corner.
///
/// Any `i32` pair is a valid cell. Corners are widened to `i64`, so the
/// cells at `i32::MAX` still have a far side, and the edge of the range
/// has no neighbour instead of wrapping around.
///
/// Ordering is lexicographic: `x` first, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Creates a new cell.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the edge-adjacent cell in the given direction, or `None`
    /// past the end of the `i32` range.
    #[must_use]
    pub fn neighbour(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.vector();
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The four corners of this cell, in clockwise order starting at the
    /// minimum corner.
    #[must_use]
    pub fn corners(self) -> [Corner; 4] {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        [
            Corner::new(x, y),
            Corner::new(x + 1, y),
            Corner::new(x + 1, y + 1),
            Corner::new(x, y + 1),
        ]
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A lattice point on a cell boundary.
///
/// Coordinates span one more than the cell range on the positive side,
/// hence `i64`.
///
/// Ordering is lexicographic: `x` first, then `y`. The smallest corner of a
/// boundary therefore always lies on its outermost ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Corner {
    pub x: i64,
    pub y: i64,
}

impl Corner {
    /// Creates a new corner.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the corner one step away in the given direction.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self::new(self.x + i64::from(dx), self.y + i64::from(dy))
    }
}
