mod circle;
mod factory;
mod rectangle;
mod regular_polygon;
mod square;

pub use circle::Circle;
pub use factory::create_shape;
pub use rectangle::Rectangle;
pub use regular_polygon::RegularPolygon;
pub use square::Square;

use crate::math::Point2;

/// Tag identifying the kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Circle,
    Square,
    Rectangle,
    Triangle,
    Polygon,
}

/// Trait for closed planar shapes.
///
/// Implementors are immutable after construction, so every query is a pure
/// function of the shape and may be called from any thread.
pub trait Shape: std::fmt::Debug + Send + Sync {
    /// Returns the anchor point of the shape.
    ///
    /// For centred shapes this is the center, for axis-aligned boxes the
    /// minimum corner.
    fn origin(&self) -> Point2;

    /// Returns the enclosed area.
    fn area(&self) -> f64;

    /// Returns the length of the boundary.
    fn perimeter(&self) -> f64;

    /// Returns whether `p` lies inside the shape or on its boundary.
    fn contains(&self, p: &Point2) -> bool;

    /// Returns the tag of the shape.
    fn shape_type(&self) -> ShapeType;

    /// Euclidean distance from [`Shape::origin`] to `(0, 0)`.
    fn distance_from_origin(&self) -> f64 {
        nalgebra::distance(&self.origin(), &Point2::origin())
    }
}
