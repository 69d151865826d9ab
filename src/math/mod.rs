/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Scalar cross product `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` is counter-clockwise from `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Signed side of `p` relative to the directed edge `v1 -> v2`.
///
/// Computes `(p - v1) x (v2 - v1)`: negative when `p` is to the left of the
/// edge, positive when it is to the right, zero on the supporting line.
#[must_use]
pub fn edge_side(p: &Point2, v1: &Point2, v2: &Point2) -> f64 {
    cross_2d(&(p - v1), &(v2 - v1))
}

/// Returns the point at `angle` radians on the circle of `radius` around `center`.
#[must_use]
pub fn point_on_circle(center: &Point2, radius: f64, angle: f64) -> Point2 {
    let (sin, cos) = angle.sin_cos();
    center + Vector2::new(radius * cos, radius * sin)
}

/// Returns whether two points coincide within [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    nalgebra::distance(a, b) < TOLERANCE
}
