use log::debug;

use crate::error::SceneError;
use crate::geometry::{intersect, CollisionRecord, PrimitiveEnum, Shape, ShapeId, ShapeIdAllocator};
use crate::material::Material;
use crate::math::{Ray, DEFAULT_TOLERANCE, NO_INTERSECTION};

/// Result of a nearest-hit query: the collision and the index of the shape
/// it belongs to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub record: CollisionRecord,
    pub index: usize,
}

/// Ordered shape list scanned linearly for every ray. Owns the id allocator,
/// so ids stay unique across `clear`.
#[derive(Clone, Debug)]
pub struct Scene {
    shapes: Vec<Shape>,
    ids: ShapeIdAllocator,
    tolerance: f32,
    no_intersection: f32,
}

impl Scene {
    pub fn new(tolerance: f32, no_intersection: f32) -> Self {
        Scene {
            shapes: Vec::new(),
            ids: ShapeIdAllocator::new(),
            tolerance,
            no_intersection,
        }
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Appends a primitive. With `id` the caller picks the identifier, which
    /// must not have been handed out before; otherwise the next free one is
    /// allocated.
    pub fn add_shape(
        &mut self,
        primitive: impl Into<PrimitiveEnum>,
        material: Material,
        id: Option<ShapeId>,
    ) -> Result<ShapeId, SceneError> {
        let id = match id {
            Some(id) => self.ids.reserve(id)?,
            None => self.ids.allocate()?,
        };
        let shape = Shape::new(id, material, primitive);
        debug!("adding {} {} at index {}", shape.primitive.get_name(), id, self.shapes.len());
        self.shapes.push(shape);
        Ok(id)
    }

    pub fn clear(&mut self) {
        debug!("clearing {} shapes", self.shapes.len());
        self.shapes.clear();
    }

    /// Nearest hit along `ray`. Shapes are scanned in insertion order and a
    /// hit replaces the current one only when strictly nearer, so ties go to
    /// the earliest shape.
    pub fn cast_ray(&self, ray: Ray) -> Option<Hit> {
        let mut nearest_time = self.no_intersection;
        let mut nearest = None;
        for (index, shape) in self.shapes.iter().enumerate() {
            if let Some(record) = intersect(ray, shape, self.tolerance) {
                if record.time < nearest_time {
                    nearest_time = record.time;
                    nearest = Some(Hit { record, index });
                }
            }
        }
        nearest
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new(DEFAULT_TOLERANCE, NO_INTERSECTION)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{Sphere, Triangle};
    use crate::math::Vector;

    fn forward_ray() -> Ray {
        Ray::new(Vector::zero(), Vector::new(0.0, 0.0, -1.0))
    }

    fn sphere(z: f32, radius: f32) -> Sphere {
        Sphere::new(Vector::new(0.0, 0.0, z), radius).unwrap()
    }

    fn triangle(z: f32) -> Triangle {
        Triangle::new(
            Vector::new(-1.0, -1.0, z),
            Vector::new(1.0, -1.0, z),
            Vector::new(0.0, 1.0, z),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::default();
        assert!(scene.cast_ray(forward_ray()).is_none());
    }

    #[test]
    fn test_nearest_shape_wins() {
        let mut scene = Scene::default();
        scene.add_shape(sphere(-10.0, 1.0), Material::default(), None).unwrap();
        scene.add_shape(triangle(-3.0), Material::default(), None).unwrap();
        scene.add_shape(sphere(-5.0, 1.0), Material::default(), None).unwrap();

        let hit = scene.cast_ray(forward_ray()).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.record.time - 3.0).abs() < scene.tolerance());
    }

    #[test]
    fn test_nearest_regardless_of_order() {
        let zs = [-20.0, -4.0, -12.0, -7.0, -30.0];
        let mut scene = Scene::default();
        for z in zs {
            scene.add_shape(triangle(z), Material::default(), None).unwrap();
        }
        let hit = scene.cast_ray(forward_ray()).unwrap();
        assert_eq!(hit.index, 1);
        for (index, shape) in scene.shapes().iter().enumerate() {
            if let Some(record) = intersect(forward_ray(), shape, scene.tolerance()) {
                assert!(record.time >= hit.record.time, "shape {} nearer", index);
            }
        }
    }

    #[test]
    fn test_tie_keeps_first() {
        let mut scene = Scene::default();
        scene.add_shape(triangle(-5.0), Material::default(), None).unwrap();
        scene.add_shape(triangle(-5.0), Material::default(), None).unwrap();
        assert_eq!(scene.cast_ray(forward_ray()).unwrap().index, 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut scene = Scene::default();
        scene.add_shape(sphere(-5.0, 1.0), Material::default(), None).unwrap();
        scene.clear();
        assert!(scene.is_empty());
        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.cast_ray(forward_ray()).is_none());
    }

    #[test]
    fn test_ids_survive_clear() {
        let mut scene = Scene::default();
        let first = scene.add_shape(sphere(-5.0, 1.0), Material::default(), None).unwrap();
        scene.clear();
        let second = scene.add_shape(sphere(-5.0, 1.0), Material::default(), None).unwrap();
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn test_explicit_ids() {
        let mut scene = Scene::default();
        let id = scene
            .add_shape(sphere(-5.0, 1.0), Material::default(), Some(ShapeId(7)))
            .unwrap();
        assert_eq!(id, ShapeId(7));
        assert_eq!(
            scene.add_shape(sphere(-5.0, 1.0), Material::default(), None),
            Ok(ShapeId(8))
        );
        assert_eq!(
            scene.add_shape(sphere(-5.0, 1.0), Material::default(), Some(ShapeId(7))),
            Err(SceneError::StaleShapeId {
                id: ShapeId(7),
                next: ShapeId(9)
            })
        );
        assert_eq!(scene.len(), 2);
    }
}
