use std::collections::{BTreeSet, VecDeque};

use super::cell::Cell;
use super::direction::Direction;

/// Splits a cell set into its maximal 4-connected components.
///
/// Each component is grown breadth-first from the smallest remaining cell,
/// so the returned order is independent of how the input was iterated:
/// components appear in ascending order of their smallest cell.
#[must_use]
pub fn partition(cells: &BTreeSet<Cell>) -> Vec<BTreeSet<Cell>> {
    let mut remaining = cells.clone();
    let mut components = Vec::new();

    while let Some(start) = remaining.pop_first() {
        let mut component = BTreeSet::new();
        let mut queue = VecDeque::new();
        component.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbour in Direction::ALL
                .into_iter()
                .filter_map(|d| current.neighbour(d))
            {
                if remaining.remove(&neighbour) {
                    component.insert(neighbour);
                    queue.push_back(neighbour);
                }
            }
        }

        components.push(component);
    }

    components
}

/// Returns `true` if the cells form exactly one 4-connected component.
///
/// Diagonal contact does not connect, and an empty set is never connected.
#[must_use]
pub fn is_connected(cells: &BTreeSet<Cell>) -> bool {
    let Some(&start) = cells.first() else {
        return false;
    };

    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbour in Direction::ALL
            .into_iter()
            .filter_map(|d| current.neighbour(d))
        {
            if cells.contains(&neighbour) && visited.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }

    visited.len() == cells.len()
}
