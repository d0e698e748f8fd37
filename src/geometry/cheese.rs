use super::polygon::Polygon;
use crate::error::Result;
use crate::grid::Cell;
use crate::math::Vector2;
use crate::operations::extract::{ExtractCheese, ExtractParams, ExtractPlatter};

/// A polygon with zero or more holes.
///
/// The outer ring winds counter-clockwise (y up) and the holes clockwise,
/// so the pair can be handed straight to renderers that take an outline and
/// a list of cut-outs.
#[derive(Debug, Clone, PartialEq)]
pub struct Cheese {
    outer: Polygon,
    holes: Vec<Polygon>,
}

impl Cheese {
    /// Creates a cheese without holes.
    #[must_use]
    pub fn new(outer: Polygon) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates a cheese with the given holes.
    #[must_use]
    pub fn with_holes(outer: Polygon, holes: Vec<Polygon>) -> Self {
        Self { outer, holes }
    }

    /// Traces a single cheese from chunk coordinates (16x16 cells).
    ///
    /// # Errors
    ///
    /// Returns a `SelectionError` if the chunks are not one 4-connected
    /// region.
    pub fn from_chunks<I>(chunks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        ExtractCheese::new(chunks).execute()
    }

    /// Traces a single cheese from cells of the given world-space size.
    ///
    /// # Errors
    ///
    /// Returns a `SelectionError` if the cells are not one 4-connected
    /// region, or a `GeometryError` if `cell_size` is not positive.
    pub fn from_cells<I>(cell_size: Vector2, cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        ExtractCheese::new(cells)
            .with_params(ExtractParams::new(cell_size))
            .execute()
    }

    /// The outline.
    #[must_use]
    pub fn outer(&self) -> &Polygon {
        &self.outer
    }

    /// The holes cut out of the outline.
    #[must_use]
    pub fn holes(&self) -> &[Polygon] {
        &self.holes
    }

    /// Covered area: the outline minus its holes.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.outer.area() - self.holes.iter().map(Polygon::area).sum::<f64>()
    }

    /// Consumes the cheese, returning its outline and holes.
    #[must_use]
    pub fn into_parts(self) -> (Polygon, Vec<Polygon>) {
        (self.outer, self.holes)
    }
}

/// One [`Cheese`] per connected component of a cell set, ordered by each
/// component's smallest cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Platter {
    cheeses: Vec<Cheese>,
}

impl Platter {
    /// Creates a platter from already traced cheeses.
    #[must_use]
    pub fn new(cheeses: Vec<Cheese>) -> Self {
        Self { cheeses }
    }

    /// Traces every connected group of chunks (16x16 cells).
    ///
    /// # Errors
    ///
    /// Never fails for the default cell size; see [`ExtractPlatter::execute`].
    pub fn from_chunks<I>(chunks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        ExtractPlatter::new(chunks).execute()
    }

    /// Traces every connected group of cells of the given world-space size.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` if `cell_size` is not positive.
    pub fn from_cells<I>(cell_size: Vector2, cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        ExtractPlatter::new(cells)
            .with_params(ExtractParams::new(cell_size))
            .execute()
    }

    /// The cheeses, ordered by each region's smallest cell.
    #[must_use]
    pub fn cheeses(&self) -> &[Cheese] {
        &self.cheeses
    }

    /// Number of cheeses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cheeses.len()
    }

    /// Returns `true` if the platter holds no cheese.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cheeses.is_empty()
    }

    /// Iterates over the cheeses in order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Cheese> {
        self.cheeses.iter()
    }

    /// Total covered area of all cheeses.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.cheeses.iter().map(Cheese::area).sum()
    }
}

impl IntoIterator for Platter {
    type Item = Cheese;
    type IntoIter = std::vec::IntoIter<Cheese>;

    fn into_iter(self) -> Self::IntoIter {
        self.cheeses.into_iter()
    }
}

impl<'a> IntoIterator for &'a Platter {
    type Item = &'a Cheese;
    type IntoIter = std::slice::Iter<'a, Cheese>;

    fn into_iter(self) -> Self::IntoIter {
        self.cheeses.iter()
    }
}
