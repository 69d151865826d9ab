use std::f64::consts::{PI, TAU};

use crate::error::{require_finite_point, require_positive, GeometryError, Result};
use crate::math::{edge_side, point_on_circle, Point2, TOLERANCE};

use super::{Shape, ShapeType};

/// A regular polygon inscribed in a circle.
///
/// Defined by a center, a side count `n >= 3` and a circumradius `r > 0`.
/// Vertex `k` sits at angle `k * 2*pi / n` on the circumcircle, so vertex 0
/// lies on the ray from the center along +X and vertices are enumerated
/// counter-clockwise.
///
/// `V(k) = center + r * (cos(k * 2*pi / n), sin(k * 2*pi / n))`
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    origin: Point2,
    sides: u32,
    circumradius: f64,
}

impl RegularPolygon {
    /// Creates a new regular polygon.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the circumcircle
    /// * `sides` - Number of sides (at least 3)
    /// * `circumradius` - Distance from the center to every vertex (must be positive)
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `sides < 3` or the
    /// circumradius is not positive, and `GeometryError::NonFinite` for
    /// non-finite inputs.
    pub fn new(center: Point2, sides: u32, circumradius: f64) -> Result<Self> {
        require_finite_point("center", &center)?;
        if sides < 3 {
            return Err(GeometryError::InvalidArgument {
                parameter: "sides",
                value: f64::from(sides),
                reason: "a polygon needs at least 3 sides",
            }
            .into());
        }
        let circumradius = require_positive("circumradius", circumradius)?;

        Ok(Self {
            origin: center,
            sides,
            circumradius,
        })
    }

    /// Returns the number of sides.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Returns the circumradius.
    #[must_use]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Returns the length of a single side, `2 * r * sin(pi / n)`.
    #[must_use]
    pub fn side_length(&self) -> f64 {
        2.0 * self.circumradius * (PI / f64::from(self.sides)).sin()
    }

    /// Returns the inradius, `r * cos(pi / n)`.
    #[must_use]
    pub fn apothem(&self) -> f64 {
        self.circumradius * (PI / f64::from(self.sides)).cos()
    }

    /// Returns vertex `k`. Indices wrap modulo the side count.
    #[must_use]
    pub fn vertex(&self, k: u32) -> Point2 {
        let step = TAU / f64::from(self.sides);
        let angle = f64::from(k % self.sides) * step;
        point_on_circle(&self.origin, self.circumradius, angle)
    }

    /// Returns all vertices in counter-clockwise order, starting on +X.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        (0..self.sides).map(|k| self.vertex(k)).collect()
    }
}

impl Shape for RegularPolygon {
    fn origin(&self) -> Point2 {
        self.origin
    }

    fn area(&self) -> f64 {
        let n = f64::from(self.sides);
        n * self.circumradius.powi(2) * (TAU / n).sin() / 2.0
    }

    fn perimeter(&self) -> f64 {
        let n = f64::from(self.sides);
        2.0 * n * self.circumradius * (PI / n).sin()
    }

    /// Points on the boundary count as inside.
    ///
    /// Each edge rejects `p` only when its signed distance to the edge's
    /// supporting line exceeds `TOLERANCE * circumradius` on the exterior side.
    fn contains(&self, p: &Point2) -> bool {
        let side_length = self.side_length();
        let band = TOLERANCE * self.circumradius;
        (0..self.sides).all(|k| {
            let v1 = self.vertex(k);
            let v2 = self.vertex(k + 1);
            edge_side(p, &v1, &v2) / side_length <= band
        })
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Polygon
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::error::ShapeKitError;

    fn polygon(sides: u32, r: f64) -> RegularPolygon {
        RegularPolygon::new(Point2::origin(), sides, r).unwrap()
    }

    #[test]
    fn square_measures() {
        let sq = polygon(4, 1.0);
        assert_relative_eq!(sq.area(), 2.0, max_relative = 1e-9);
        assert_relative_eq!(sq.perimeter(), 4.0 * 2f64.sqrt(), max_relative = 1e-9);
    }

    #[test]
    fn square_containment() {
        let sq = polygon(4, 1.0);
        // (0.5, 0.5) lies on the edge between (1, 0) and (0, 1).
        assert!(sq.contains(&Point2::new(0.5, 0.5)));
        assert!(sq.contains(&Point2::new(0.2, -0.3)));
        assert!(!sq.contains(&Point2::new(1.0, 1.0)));
    }

    #[test]
    fn hexagon_measures_and_containment() {
        let hex = polygon(6, 1.0);
        assert_relative_eq!(hex.area(), 3.0 * 3f64.sqrt() / 2.0, max_relative = 1e-9);
        assert_relative_eq!(hex.perimeter(), 6.0, max_relative = 1e-9);
        assert!(hex.contains(&Point2::new(0.9, 0.0)));
        assert!(!hex.contains(&Point2::new(1.1, 0.0)));
    }

    #[test]
    fn triangle_measures() {
        let tri = polygon(3, 1.0);
        assert_relative_eq!(tri.area(), 3.0 * 3f64.sqrt() / 4.0, max_relative = 1e-9);
        assert_relative_eq!(tri.perimeter(), 3.0 * 3f64.sqrt(), max_relative = 1e-9);
    }

    #[test]
    fn translated_square() {
        let sq = RegularPolygon::new(Point2::new(10.0, 10.0), 4, 1.0).unwrap();
        assert!(sq.contains(&Point2::new(10.5, 10.5)));
        assert!(!sq.contains(&Point2::new(11.1, 10.0)));
    }

    #[test]
    fn many_sides_approach_circle() {
        let p = polygon(100, 1.0);
        assert!((p.area() - PI).abs() / PI < 0.002);
        assert!((p.perimeter() - TAU).abs() / TAU < 0.001);
    }

    #[test]
    fn center_is_inside() {
        for sides in [3, 4, 7, 12] {
            let p = RegularPolygon::new(Point2::new(-2.0, 5.0), sides, 0.5).unwrap();
            assert!(p.contains(&Point2::new(-2.0, 5.0)));
        }
    }

    #[test]
    fn vertices_are_on_boundary() {
        let p = polygon(5, 2.0);
        for v in p.vertices() {
            assert!(p.contains(&v));
            assert_relative_eq!(
                nalgebra::distance(&v, &Point2::origin()),
                2.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn first_vertex_on_positive_x() {
        let p = RegularPolygon::new(Point2::new(1.0, 1.0), 6, 3.0).unwrap();
        assert!((p.vertex(0) - Point2::new(4.0, 1.0)).norm() < 1e-12);
        assert!((p.vertex(6) - p.vertex(0)).norm() < 1e-12);
    }

    #[test]
    fn vertices_counter_clockwise() {
        let p = polygon(7, 1.5);
        let vs = p.vertices();
        let n = vs.len();
        let shoelace: f64 = (0..n)
            .map(|i| {
                let j = (i + 1) % n;
                vs[i].x * vs[j].y - vs[j].x * vs[i].y
            })
            .sum::<f64>()
            * 0.5;
        assert_relative_eq!(shoelace, p.area(), max_relative = 1e-9);
    }

    #[test]
    fn side_length_and_apothem() {
        let hex = polygon(6, 2.0);
        assert_relative_eq!(hex.side_length(), 2.0, max_relative = 1e-12);
        assert_relative_eq!(hex.apothem(), 3f64.sqrt(), max_relative = 1e-12);
        // The edge from vertex 1 to vertex 2 is horizontal at y = apothem.
        assert!(hex.contains(&Point2::new(0.0, 3f64.sqrt() - 1e-6)));
        assert!(!hex.contains(&Point2::new(0.0, 3f64.sqrt() + 1e-6)));
    }

    #[test]
    fn containment_independent_of_scale() {
        for sides in [3, 4, 6, 17] {
            for r in [1e-11, 1e-9, 1.0, 1e6] {
                let p = polygon(sides, r);
                let apothem = p.apothem();
                for k in 0..sides {
                    let angle = f64::from(k) * TAU / f64::from(sides);
                    let dir = crate::math::Vector2::new(angle.cos(), angle.sin());
                    assert!(!p.contains(&(Point2::origin() + dir * (1.05 * r))), "r = {r}");
                    assert!(p.contains(&(Point2::origin() + dir * (0.95 * apothem))), "r = {r}");
                }
                assert!(!p.contains(&Point2::new(5.0 * r, 0.0)), "r = {r}");
                assert!(p.contains(&Point2::origin()), "r = {r}");
            }
        }
    }

    #[test]
    fn tiny_center_offset_is_not_special() {
        let p = RegularPolygon::new(Point2::new(1.0, 1.0), 4, 1e-12).unwrap();
        assert!(p.contains(&Point2::new(1.0, 1.0)));
        assert!(!p.contains(&Point2::new(1.0 + 5e-11, 1.0)));
    }

    #[test]
    fn too_few_sides() {
        let err = RegularPolygon::new(Point2::origin(), 2, 1.0).unwrap_err();
        assert!(matches!(
            err,
            ShapeKitError::Geometry(GeometryError::InvalidArgument {
                parameter: "sides",
                ..
            })
        ));
    }

    #[test]
    fn invalid_radius() {
        assert!(RegularPolygon::new(Point2::origin(), 4, 0.0).is_err());
        assert!(RegularPolygon::new(Point2::origin(), 4, -1.0).is_err());
        assert!(RegularPolygon::new(Point2::origin(), 4, f64::NAN).is_err());
    }

    #[test]
    fn non_finite_center() {
        assert!(RegularPolygon::new(Point2::new(f64::NAN, 0.0), 4, 1.0).is_err());
    }

    #[test]
    fn tag() {
        assert_eq!(polygon(8, 1.0).shape_type(), ShapeType::Polygon);
    }
}
