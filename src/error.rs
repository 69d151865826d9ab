use thiserror::Error;

use crate::shape::ShapeType;

/// Top-level error type for shapekit.
#[derive(Debug, Error)]
pub enum ShapeKitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors raised while constructing a shape.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("invalid argument {parameter} = {value}: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{parameter} must be finite")]
    NonFinite { parameter: &'static str },
}

/// Errors related to the shape factory and the scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("shape not found in scene")]
    ShapeNotFound,

    #[error("shape type {0:?} is not supported")]
    UnsupportedShape(ShapeType),

    #[error("missing parameter {index} for {shape:?}")]
    MissingParameter { shape: ShapeType, index: usize },
}

/// Convenience type alias for results using [`ShapeKitError`].
pub type Result<T> = std::result::Result<T, ShapeKitError>;

/// Rejects non-finite values and values that are not strictly positive.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { parameter }.into());
    }
    if value <= 0.0 {
        return Err(GeometryError::InvalidArgument {
            parameter,
            value,
            reason: "must be positive",
        }
        .into());
    }
    Ok(value)
}

/// Rejects points with a non-finite coordinate.
pub(crate) fn require_finite_point(
    parameter: &'static str,
    point: &crate::math::Point2,
) -> Result<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { parameter }.into())
    }
}
