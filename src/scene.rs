use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::error::{Result, SceneError};
use crate::math::{points_coincide, Point2};
use crate::shape::{Shape, ShapeType};

slotmap::new_key_type! {
    /// Unique identifier for a shape in a [`Scene`].
    pub struct ShapeId;
}

/// Ordering criteria for [`Scene::sorted_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Area,
    Perimeter,
    /// Order in which shapes were added.
    Insertion,
    DistanceFromOrigin,
}

#[derive(Debug)]
struct SceneEntry {
    shape: Box<dyn Shape>,
    /// Insertion sequence number. Later shapes sit on top of earlier ones.
    sequence: u64,
}

/// Arena that owns a set of shapes.
///
/// Shapes are referenced via typed IDs (generational indices). Each shape
/// remembers when it was added so the scene can answer stacking queries.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: SlotMap<ShapeId, SceneEntry>,
    next_sequence: u64,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shape on top of the scene and returns its ID.
    pub fn add_shape(&mut self, shape: Box<dyn Shape>) -> ShapeId {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let shape_type = shape.shape_type();
        let id = self.shapes.insert(SceneEntry { shape, sequence });
        debug!(?id, ?shape_type, sequence, "added shape");
        id
    }

    /// Removes a shape and returns it.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::ShapeNotFound` if the ID is not in the scene.
    pub fn remove_shape(&mut self, id: ShapeId) -> Result<Box<dyn Shape>> {
        let entry = self.shapes.remove(id).ok_or(SceneError::ShapeNotFound)?;
        debug!(?id, "removed shape");
        Ok(entry.shape)
    }

    /// Removes every shape of the given type, returning how many were removed.
    pub fn remove_shapes_by_type(&mut self, shape_type: ShapeType) -> usize {
        let before = self.shapes.len();
        self.shapes
            .retain(|_, entry| entry.shape.shape_type() != shape_type);
        let removed = before - self.shapes.len();
        debug!(?shape_type, removed, "removed shapes by type");
        removed
    }

    /// Removes every shape whose origin coincides with `origin`, returning
    /// how many were removed.
    pub fn remove_shapes_at(&mut self, origin: &Point2) -> usize {
        let before = self.shapes.len();
        self.shapes
            .retain(|_, entry| !points_coincide(&entry.shape.origin(), origin));
        let removed = before - self.shapes.len();
        debug!(x = origin.x, y = origin.y, removed, "removed shapes at origin");
        removed
    }

    /// Returns the earliest-added shape whose origin coincides with `origin`.
    #[must_use]
    pub fn find_by_origin(&self, origin: &Point2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .filter(|(_, entry)| points_coincide(&entry.shape.origin(), origin))
            .min_by_key(|(_, entry)| entry.sequence)
            .map(|(id, _)| id)
    }

    /// Returns a reference to the shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::ShapeNotFound` if the ID is not in the scene.
    pub fn shape(&self, id: ShapeId) -> Result<&dyn Shape> {
        self.shapes
            .get(id)
            .map(|entry| entry.shape.as_ref())
            .ok_or_else(|| SceneError::ShapeNotFound.into())
    }

    /// Returns the number of shapes in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns whether the scene holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &dyn Shape)> {
        self.in_insertion_order()
            .into_iter()
            .map(|(id, entry)| (id, entry.shape.as_ref()))
    }

    /// Returns all shape IDs sorted ascending by `key`.
    ///
    /// Ties keep insertion order.
    #[must_use]
    pub fn sorted_by(&self, key: SortKey) -> Vec<ShapeId> {
        let mut entries = self.in_insertion_order();
        match key {
            SortKey::Insertion => {}
            SortKey::Area => {
                entries.sort_by(|(_, a), (_, b)| a.shape.area().total_cmp(&b.shape.area()));
            }
            SortKey::Perimeter => entries.sort_by(|(_, a), (_, b)| {
                a.shape.perimeter().total_cmp(&b.shape.perimeter())
            }),
            SortKey::DistanceFromOrigin => entries.sort_by(|(_, a), (_, b)| {
                a.shape
                    .distance_from_origin()
                    .total_cmp(&b.shape.distance_from_origin())
            }),
        }
        entries.into_iter().map(|(id, _)| id).collect()
    }

    /// Returns the shapes that contain `point`, in insertion order.
    #[must_use]
    pub fn shapes_enclosing(&self, point: &Point2) -> Vec<ShapeId> {
        let hits: Vec<ShapeId> = self
            .in_insertion_order()
            .into_iter()
            .filter(|(_, entry)| entry.shape.contains(point))
            .map(|(id, _)| id)
            .collect();
        trace!(x = point.x, y = point.y, hits = hits.len(), "enclosing query");
        hits
    }

    /// Returns the shapes added after `base` whose origin lies inside `base`,
    /// in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::ShapeNotFound` if `base` is not in the scene.
    pub fn shapes_on_top_of(&self, base: ShapeId) -> Result<Vec<ShapeId>> {
        let base_entry = self.shapes.get(base).ok_or(SceneError::ShapeNotFound)?;
        Ok(self
            .in_insertion_order()
            .into_iter()
            .filter(|(_, entry)| {
                entry.sequence > base_entry.sequence
                    && base_entry.shape.contains(&entry.shape.origin())
            })
            .map(|(id, _)| id)
            .collect())
    }

    fn in_insertion_order(&self) -> Vec<(ShapeId, &SceneEntry)> {
        let mut entries: Vec<_> = self.shapes.iter().collect();
        entries.sort_by_key(|(_, entry)| entry.sequence);
        entries
    }
}
