use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (y pointing up).
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    // Relative to the first point, so rings far from the origin keep their
    // precision.
    let origin = points[0];
    let sum: f64 = points[1..]
        .windows(2)
        .map(|w| {
            let (a, b) = (w[0] - origin, w[1] - origin);
            a.x * b.y - b.x * a.y
        })
        .sum();
    sum * 0.5
}

/// Returns the component-wise minimum and maximum of a point set,
/// or `None` when it is empty.
#[must_use]
pub fn bounding_box_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in rest {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the right-pointing normal of a direction vector.
#[must_use]
pub fn right_normal(dir: Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}

/// Returns the normal pointing away from the interior of a polygon with the
/// given signed area.
///
/// For a counter-clockwise ring the outside is on the right of each edge,
/// for a clockwise ring it is on the left.
#[must_use]
pub fn outward_normal(dir: Vector2, signed_area: f64) -> Vector2 {
    if signed_area < 0.0 {
        left_normal(dir)
    } else {
        right_normal(dir)
    }
}
