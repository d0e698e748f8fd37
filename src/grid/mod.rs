//! Integer-lattice side of the extraction: cells, their boundary edges and
//! the rings traced from them.

pub mod cell;
pub mod connectivity;
pub mod direction;
pub mod edge_graph;
pub mod simplify;
pub mod trace;

pub use cell::{Cell, Corner};
pub use connectivity::{is_connected, partition};
pub use direction::Direction;
pub use edge_graph::{BoundaryIndex, DirectionSlots, Edge};
pub use simplify::simplify_tail;
pub use trace::{trace_all, trace_ring, RingKind, TracedRings};
