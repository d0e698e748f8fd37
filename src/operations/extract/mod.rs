mod platter;
mod single;

pub use platter::ExtractPlatter;
pub use single::ExtractCheese;

use std::collections::BTreeSet;

use crate::error::{GeometryError, Result};
use crate::geometry::{Cheese, Polygon};
use crate::grid::{trace_all, BoundaryIndex, Cell, Corner};
use crate::math::{Point2, Vector2};

/// World-space size of one 16x16 chunk.
pub const CHUNK_CELL_SIZE: f64 = 16.0;

/// Parameters controlling how traced rings map to world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractParams {
    /// World-space size of one cell along each axis.
    pub cell_size: Vector2,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self::chunks()
    }
}

impl ExtractParams {
    /// Parameters with a custom cell size.
    #[must_use]
    pub fn new(cell_size: Vector2) -> Self {
        Self { cell_size }
    }

    /// Parameters for chunk-sized (16x16) cells.
    #[must_use]
    pub fn chunks() -> Self {
        Self::new(Vector2::new(CHUNK_CELL_SIZE, CHUNK_CELL_SIZE))
    }

    /// Returns a copy with the given cell size.
    #[must_use]
    pub fn with_cell_size(mut self, x: f64, y: f64) -> Self {
        self.cell_size = Vector2::new(x, y);
        self
    }

    /// Checks that both cell-size components are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidCellSize` otherwise.
    pub fn validate(&self) -> Result<()> {
        let (x, y) = (self.cell_size.x, self.cell_size.y);
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(x) && valid(y) {
            Ok(())
        } else {
            Err(GeometryError::InvalidCellSize { x, y }.into())
        }
    }
}

/// Scales a ring of lattice corners into a world-space polygon.
// Corners stay within 33 bits, exact in an f64 mantissa.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn to_world_space(ring: &[Corner], cell_size: Vector2) -> Polygon {
    ring.iter()
        .map(|c| Point2::new(c.x as f64 * cell_size.x, c.y as f64 * cell_size.y))
        .collect::<Vec<_>>()
        .into()
}

/// Traces one cell set into a cheese without checking connectivity.
///
/// Returns `None` for an empty set.
fn assemble(cells: &BTreeSet<Cell>, cell_size: Vector2) -> Option<Cheese> {
    let rings = trace_all(BoundaryIndex::build(cells))?;
    let outer = to_world_space(&rings.outer, cell_size);
    let holes = rings
        .holes
        .iter()
        .map(|hole| to_world_space(hole, cell_size))
        .collect();
    Some(Cheese::with_holes(outer, holes))
}
