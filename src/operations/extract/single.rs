use std::collections::BTreeSet;

use super::{assemble, ExtractParams};
use crate::error::{CheeseError, Result, SelectionError};
use crate::geometry::Cheese;
use crate::grid::{is_connected, partition, Cell};

/// Traces a cell set that must form exactly one 4-connected region.
///
/// Duplicate cells collapse into one. Use
/// [`ExtractPlatter`](super::ExtractPlatter) for selections that may be
/// split into several regions.
#[derive(Debug, Clone)]
pub struct ExtractCheese {
    cells: BTreeSet<Cell>,
    params: ExtractParams,
}

impl ExtractCheese {
    /// Creates a new `ExtractCheese` operation with chunk-sized cells.
    #[must_use]
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Self {
            cells: cells.into_iter().collect(),
            params: ExtractParams::default(),
        }
    }

    /// Sets custom extraction parameters.
    #[must_use]
    pub fn with_params(mut self, params: ExtractParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the world-space size of one cell.
    #[must_use]
    pub fn with_cell_size(mut self, x: f64, y: f64) -> Self {
        self.params = self.params.with_cell_size(x, y);
        self
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidCellSize` for a non-positive cell size,
    /// `SelectionError::Empty` for no cells and
    /// `SelectionError::NotConnected` when the cells form more than one
    /// region.
    #[tracing::instrument(level = "debug", skip_all, fields(cells = self.cells.len()))]
    pub fn execute(&self) -> Result<Cheese> {
        self.params.validate()?;

        if self.cells.is_empty() {
            return Err(SelectionError::Empty.into());
        }
        if !is_connected(&self.cells) {
            let components = partition(&self.cells).len();
            tracing::debug!(components, "rejecting disconnected selection");
            return Err(SelectionError::NotConnected { components }.into());
        }

        let cheese = assemble(&self.cells, self.params.cell_size)
            .ok_or(CheeseError::Selection(SelectionError::Empty))?;
        tracing::debug!(
            outer = cheese.outer().len(),
            holes = cheese.holes().len(),
            "extracted cheese"
        );
        Ok(cheese)
    }
}
