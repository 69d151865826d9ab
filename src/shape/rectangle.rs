use crate::error::{require_finite_point, require_positive, Result};
use crate::math::Point2;

use super::{Shape, ShapeType};

/// An axis-aligned rectangle anchored at its minimum corner.
///
/// `length` extends along +X, `breadth` along +Y.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    origin: Point2,
    length: f64,
    breadth: f64,
}

impl Rectangle {
    /// Creates a new rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not positive or any input is
    /// non-finite.
    pub fn new(origin: Point2, length: f64, breadth: f64) -> Result<Self> {
        require_finite_point("origin", &origin)?;
        let length = require_positive("length", length)?;
        let breadth = require_positive("breadth", breadth)?;
        Ok(Self {
            origin,
            length,
            breadth,
        })
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn breadth(&self) -> f64 {
        self.breadth
    }
}

impl Shape for Rectangle {
    fn origin(&self) -> Point2 {
        self.origin
    }

    fn area(&self) -> f64 {
        self.length * self.breadth
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.breadth)
    }

    fn contains(&self, p: &Point2) -> bool {
        (self.origin.x..=self.origin.x + self.length).contains(&p.x)
            && (self.origin.y..=self.origin.y + self.breadth).contains(&p.y)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangle
    }
}
