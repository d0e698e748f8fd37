use super::cell::Corner;
use super::direction::Direction;
use super::edge_graph::{BoundaryIndex, Edge};
use super::simplify::simplify_tail;

/// Which side of the region a ring bounds.
///
/// The two kinds pick edges at a junction with mirrored rotations, which is
/// what makes outer rings and holes wind in opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingKind {
    /// The outline of a component; tried counter-clockwise first.
    Outer,
    /// An enclosed hole; tried clockwise first.
    Hole,
}

impl RingKind {
    fn turn(self, direction: Direction) -> Direction {
        match self {
            Self::Outer => direction.counter_clockwise(),
            Self::Hole => direction.clockwise(),
        }
    }
}

/// Rings traced from the boundary of one connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedRings {
    pub outer: Vec<Corner>,
    pub holes: Vec<Vec<Corner>>,
}

/// Drains a boundary index into its outer ring and holes.
///
/// The first ring starts at the smallest corner and is therefore the outer
/// outline; every ring traced afterwards is a hole. Returns `None` for an
/// empty index.
///
/// # Panics
///
/// Panics on a loose end (see [`trace_ring`]).
#[must_use]
pub fn trace_all(mut index: BoundaryIndex) -> Option<TracedRings> {
    let outer = trace_ring(&mut index, RingKind::Outer)?;
    let mut holes = Vec::new();
    while let Some(hole) = trace_ring(&mut index, RingKind::Hole) {
        tracing::trace!(points = hole.len(), "traced hole");
        holes.push(hole);
    }
    tracing::trace!(points = outer.len(), holes = holes.len(), "traced outline");
    Some(TracedRings { outer, holes })
}

/// Traces one closed ring starting at the smallest remaining corner,
/// removing its edges from the index.
///
/// At each corner the walk starts from the direction it came from and turns
/// according to `kind` until it finds an unused edge. Collinear points are
/// collapsed as the ring grows. The start corner ends up last in the
/// returned ring.
///
/// # Panics
///
/// Panics if the walk reaches a corner without outgoing edges before closing
/// the ring. A boundary built from a deduplicated cell set always closes, so
/// this signals a broken index rather than bad input.
pub fn trace_ring(index: &mut BoundaryIndex, kind: RingKind) -> Option<Vec<Corner>> {
    index.prune_empty();
    let start = index.first_corner()?;

    let mut ring = Vec::new();
    let mut position = start;
    // Discarded by the first step; any direction works.
    let mut arrived = Direction::Up;
    loop {
        let edge = take_next_edge(index, position, arrived, kind);
        ring.push(position);
        position = edge.to();
        arrived = edge.direction();
        simplify_tail(&mut ring);
        if position == start {
            break;
        }
    }

    // The joint between the old last and first point may now be collinear.
    ring.rotate_left(1);
    simplify_tail(&mut ring);
    index.prune_empty();
    Some(ring)
}

fn take_next_edge(
    index: &mut BoundaryIndex,
    position: Corner,
    arrived: Direction,
    kind: RingKind,
) -> Edge {
    let slots = index.slots_mut(position);
    let mut direction = arrived.opposite();
    if let Some(slots) = slots {
        for _ in 0..4 {
            direction = kind.turn(direction);
            if let Some(edge) = slots.take(direction) {
                return edge;
            }
        }
    }
    panic!(
        "loose end at corner ({}, {}) while tracing {kind:?} ring",
        position.x, position.y
    );
}
