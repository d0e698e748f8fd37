use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::Point2;

/// Fixed point of a [`ScalePolygon`] operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleCenter {
    /// The world origin `(0, 0)`.
    Origin,
    /// The midpoint of the polygon's bounding box.
    Middle,
    /// An arbitrary point.
    Point(Point2),
}

/// Scales a polygon uniformly around a fixed point.
#[derive(Debug, Clone)]
pub struct ScalePolygon {
    polygon: Polygon,
    factor: f64,
    center: ScaleCenter,
}

impl ScalePolygon {
    /// Creates a new `ScalePolygon` operation.
    #[must_use]
    pub fn new(polygon: Polygon, factor: f64, center: ScaleCenter) -> Self {
        Self {
            polygon,
            factor,
            center,
        }
    }

    /// Scales around `(0, 0)`.
    #[must_use]
    pub fn around_origin(polygon: Polygon, factor: f64) -> Self {
        Self::new(polygon, factor, ScaleCenter::Origin)
    }

    /// Scales around the middle of the bounding box.
    #[must_use]
    pub fn around_middle(polygon: Polygon, factor: f64) -> Self {
        Self::new(polygon, factor, ScaleCenter::Middle)
    }

    /// Scales around `point`.
    #[must_use]
    pub fn around(polygon: Polygon, factor: f64, point: Point2) -> Self {
        Self::new(polygon, factor, ScaleCenter::Point(point))
    }

    /// Executes the scaling, returning a new polygon.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the polygon has fewer than
    /// 3 points.
    pub fn execute(&self) -> Result<Polygon> {
        let points = self.polygon.points();
        if points.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "at least 3 points required to scale a polygon, got {}",
                points.len()
            ))
            .into());
        }

        let origin = match self.center {
            ScaleCenter::Origin => Point2::origin(),
            ScaleCenter::Point(p) => p,
            ScaleCenter::Middle => match (self.polygon.min(), self.polygon.max()) {
                (Some(min), Some(max)) => nalgebra::center(&min, &max),
                _ => Point2::origin(),
            },
        };

        Ok(points
            .iter()
            .map(|p| origin + (p - origin) * self.factor)
            .collect::<Vec<_>>()
            .into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn assert_corners(poly: &Polygon, expected: [(f64, f64); 4]) {
        assert_eq!(poly.len(), 4);
        for (p, (x, y)) in poly.points().iter().zip(expected) {
            assert_relative_eq!(p.x, x, epsilon = 1e-4);
            assert_relative_eq!(p.y, y, epsilon = 1e-4);
        }
    }

    fn square() -> Polygon {
        Polygon::rect(0.0, 0.0, 16.0, 16.0)
    }

    #[test]
    fn scale_origin() {
        let scaled = ScalePolygon::around_origin(square(), 2.0).execute().unwrap();
        assert_corners(&scaled, [(0.0, 0.0), (32.0, 0.0), (32.0, 32.0), (0.0, 32.0)]);
    }

    #[test]
    fn scale_middle() {
        let scaled = ScalePolygon::around_middle(square(), 2.0).execute().unwrap();
        assert_corners(
            &scaled,
            [(-8.0, -8.0), (24.0, -8.0), (24.0, 24.0), (-8.0, 24.0)],
        );
    }

    #[test]
    fn scale_around_point() {
        let scaled = ScalePolygon::around(square(), 2.0, Point2::new(16.0, 16.0))
            .execute()
            .unwrap();
        assert_corners(
            &scaled,
            [(-16.0, -16.0), (16.0, -16.0), (16.0, 16.0), (-16.0, 16.0)],
        );
    }

    #[test]
    fn middle_uses_bounding_box_not_area_centroid() {
        // L-shaped outline: the area centroid differs from the box middle.
        let l = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 4.0),
            Point2::new(0.0, 4.0),
        ]);
        let scaled = ScalePolygon::around_middle(l, 0.0).execute().unwrap();
        for p in scaled.points() {
            assert_relative_eq!(p.x, 2.0);
            assert_relative_eq!(p.y, 2.0);
        }
    }

    #[test]
    fn too_few_points_rejected() {
        let line = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(ScalePolygon::around_origin(line, 2.0).execute().is_err());
    }
}
