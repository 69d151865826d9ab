use tracing::debug;

use crate::error::{GeometryError, Result, SceneError};
use crate::math::Point2;

use super::{Circle, Rectangle, RegularPolygon, Shape, ShapeType, Square};

/// Builds a shape of the given type from a flat parameter list.
///
/// | type        | parameters                 |
/// |-------------|----------------------------|
/// | `Circle`    | `[radius]`                 |
/// | `Square`    | `[side]`                   |
/// | `Rectangle` | `[length, breadth]`        |
/// | `Polygon`   | `[sides, circumradius]`    |
///
/// Extra parameters are ignored.
///
/// # Errors
///
/// Returns `SceneError::MissingParameter` if the list is too short,
/// `SceneError::UnsupportedShape` for `Triangle`, and the shape's own
/// construction error for invalid values.
pub fn create_shape(
    shape_type: ShapeType,
    origin: Point2,
    parameters: &[f64],
) -> Result<Box<dyn Shape>> {
    let param = |index: usize| -> Result<f64> {
        parameters.get(index).copied().ok_or_else(|| {
            SceneError::MissingParameter {
                shape: shape_type,
                index,
            }
            .into()
        })
    };

    let shape: Box<dyn Shape> = match shape_type {
        ShapeType::Circle => Box::new(Circle::new(origin, param(0)?)?),
        ShapeType::Square => Box::new(Square::new(origin, param(0)?)?),
        ShapeType::Rectangle => Box::new(Rectangle::new(origin, param(0)?, param(1)?)?),
        ShapeType::Polygon => {
            let sides = side_count(param(0)?)?;
            Box::new(RegularPolygon::new(origin, sides, param(1)?)?)
        }
        ShapeType::Triangle => return Err(SceneError::UnsupportedShape(shape_type).into()),
    };

    debug!(?shape_type, x = origin.x, y = origin.y, "created shape");
    Ok(shape)
}

/// Interprets a parameter as a side count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn side_count(value: f64) -> Result<u32> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { parameter: "sides" }.into());
    }
    if value.fract().abs() > 0.0 || value < 3.0 || value > f64::from(u32::MAX) {
        return Err(GeometryError::InvalidArgument {
            parameter: "sides",
            value,
            reason: "must be a whole number of at least 3",
        }
        .into());
    }
    Ok(value as u32)
}
