pub mod error;
pub mod math;
pub mod scene;
pub mod shape;

pub use error::{Result, ShapeKitError};
pub use scene::{Scene, ShapeId, SortKey};
pub use shape::{create_shape, Circle, Rectangle, RegularPolygon, Shape, ShapeType, Square};
