use super::cell::Corner;

/// Drops the middle of the last three ring points if they are collinear.
///
/// Every traced edge is axis-aligned, so three points are collinear exactly
/// when they share an `x` or a `y` coordinate.
pub fn simplify_tail(ring: &mut Vec<Corner>) {
    let n = ring.len();
    if n < 3 {
        return;
    }
    let (from, middle, to) = (ring[n - 3], ring[n - 2], ring[n - 1]);
    if (from.x == middle.x && middle.x == to.x) || (from.y == middle.y && middle.y == to.y) {
        ring.remove(n - 2);
    }
}
