use crate::error::{require_finite_point, require_positive, Result};
use crate::math::Point2;

use super::{Shape, ShapeType};

/// An axis-aligned square anchored at its minimum corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    origin: Point2,
    side: f64,
}

impl Square {
    /// Creates a new square spanning `[origin.x, origin.x + side]` by
    /// `[origin.y, origin.y + side]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the side is not positive or any input is non-finite.
    pub fn new(origin: Point2, side: f64) -> Result<Self> {
        require_finite_point("origin", &origin)?;
        let side = require_positive("side", side)?;
        Ok(Self { origin, side })
    }

    /// Returns the side length.
    #[must_use]
    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn origin(&self) -> Point2 {
        self.origin
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    fn contains(&self, p: &Point2) -> bool {
        (self.origin.x..=self.origin.x + self.side).contains(&p.x)
            && (self.origin.y..=self.origin.y + self.side).contains(&p.y)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Square
    }
}
