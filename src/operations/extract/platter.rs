use std::collections::BTreeSet;

use super::{assemble, ExtractParams};
use crate::error::Result;
use crate::geometry::Platter;
use crate::grid::{partition, Cell};

/// Traces every 4-connected region of a cell set into its own cheese.
///
/// Any selection is accepted, including an empty or disconnected one.
#[derive(Debug, Clone)]
pub struct ExtractPlatter {
    cells: BTreeSet<Cell>,
    params: ExtractParams,
}

impl ExtractPlatter {
    /// Creates a new `ExtractPlatter` operation with chunk-sized cells.
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

    /// Executes the extraction, one cheese per region ordered by the
    /// region's smallest cell.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidCellSize` for a non-positive cell size.
    ///
    /// # Panics
    ///
    /// Panics if a region traces to no boundary at all. Regions produced by
    /// [`partition`] are never empty, so every one yields a cheese.
    #[tracing::instrument(level = "debug", skip_all, fields(cells = self.cells.len()))]
    pub fn execute(&self) -> Result<Platter> {
        self.params.validate()?;

        let components = partition(&self.cells);
        tracing::debug!(components = components.len(), "partitioned selection");

        let cheeses = components
            .iter()
            .map(|component| {
                assemble(component, self.params.cell_size).unwrap_or_else(|| {
                    panic!("region of {} cells has no boundary", component.len())
                })
            })
            .collect();
        Ok(Platter::new(cheeses))
    }
}
