//! Polygon outlines with holes from sets of grid cells.
//!
//! A selection of unit cells is traced into a [`Cheese`]: one outer ring plus
//! a hole ring for every enclosed gap. Selections that fall apart into
//! several 4-connected regions become a [`Platter`] of cheeses.
//!
//! ```
//! use cheeseboard::{Cell, Cheese};
//!
//! let cheese = Cheese::from_chunks([Cell::new(0, 0), Cell::new(1, 0)])?;
//! assert_eq!(cheese.outer().len(), 4);
//! assert!(cheese.holes().is_empty());
//! # Ok::<(), cheeseboard::CheeseError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod grid;
pub mod math;
pub mod operations;

pub use error::{CheeseError, Result};
pub use geometry::{Cheese, Platter, Polygon};
pub use grid::Cell;
