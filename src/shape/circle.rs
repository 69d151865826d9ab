use std::f64::consts::{PI, TAU};

use crate::error::{require_finite_point, require_positive, Result};
use crate::math::Point2;

use super::{Shape, ShapeType};

/// A disc bounded by a circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or any input is non-finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        require_finite_point("center", &center)?;
        let radius = require_positive("radius", radius)?;
        Ok(Self { center, radius })
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn origin(&self) -> Point2 {
        self.center
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        TAU * self.radius
    }

    fn contains(&self, p: &Point2) -> bool {
        nalgebra::distance(&self.center, p) <= self.radius
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }
}
