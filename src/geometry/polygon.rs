use crate::math::polygon_2d::{bounding_box_2d, signed_area_2d};
use crate::math::Point2;

/// A closed ring of world-space points; the last point connects back to the
/// first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates an axis-aligned rectangle with points
    /// `(x1, y1), (x2, y1), (x2, y2), (x1, y2)`.
    #[must_use]
    pub fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(vec![
            Point2::new(x1, y1),
            Point2::new(x2, y1),
            Point2::new(x2, y2),
            Point2::new(x1, y2),
        ])
    }

    /// Approximates a circle with `points` evenly spaced vertices.
    ///
    /// The first vertex sits at `(cx, cy + radius)` and the following ones
    /// step towards `+x`.
    #[must_use]
    pub fn circle(cx: f64, cy: f64, radius: f64, points: u32) -> Self {
        let step = std::f64::consts::TAU / f64::from(points);
        let pts = (0..points)
            .map(|i| {
                let angle = step * f64::from(i);
                Point2::new(cx + angle.sin() * radius, cy + angle.cos() * radius)
            })
            .collect();
        Self::new(pts)
    }

    /// The ring's points in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the point at `index`, if present.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<Point2> {
        self.points.get(index).copied()
    }

    /// Number of points in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ring has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Component-wise minimum of all points.
    #[must_use]
    pub fn min(&self) -> Option<Point2> {
        bounding_box_2d(&self.points).map(|(min, _)| min)
    }

    /// Component-wise maximum of all points.
    #[must_use]
    pub fn max(&self) -> Option<Point2> {
        bounding_box_2d(&self.points).map(|(_, max)| max)
    }

    /// Signed enclosed area; positive for counter-clockwise rings.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Enclosed area regardless of winding.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Consumes the polygon, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}
