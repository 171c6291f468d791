use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::material::Material;
use crate::math::{Ray, Vector};

mod sphere;
mod triangle;

pub use sphere::Sphere;
pub use triangle::Triangle;

/// Where a ray met a surface. `time` is the ray parameter, so
/// `ray.point_at_parameter(time) == point`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionRecord {
    pub time: f32,
    pub point: Vector,
    pub normal: Vector,
}

impl CollisionRecord {
    pub fn new(time: f32, point: Vector, normal: Vector) -> Self {
        CollisionRecord {
            time,
            point,
            normal,
        }
    }
}

pub trait Primitive {
    /// Nearest valid hit along `r`, or `None`. `tolerance` drives every
    /// parallel and tangency test.
    fn intersect(&self, r: Ray, tolerance: f32) -> Option<CollisionRecord>;
    fn normal_at(&self, point: Vector) -> Vector;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PrimitiveEnum {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl PrimitiveEnum {
    pub fn get_name(&self) -> &str {
        match self {
            PrimitiveEnum::Sphere(_) => Sphere::NAME,
            PrimitiveEnum::Triangle(_) => Triangle::NAME,
        }
    }
}

impl Primitive for PrimitiveEnum {
    fn intersect(&self, r: Ray, tolerance: f32) -> Option<CollisionRecord> {
        match self {
            PrimitiveEnum::Sphere(s) => s.intersect(r, tolerance),
            PrimitiveEnum::Triangle(t) => t.intersect(r, tolerance),
        }
    }
    fn normal_at(&self, point: Vector) -> Vector {
        match self {
            PrimitiveEnum::Sphere(s) => s.normal_at(point),
            PrimitiveEnum::Triangle(t) => t.normal_at(point),
        }
    }
}

impl From<Sphere> for PrimitiveEnum {
    fn from(value: Sphere) -> Self {
        PrimitiveEnum::Sphere(value)
    }
}

impl From<Triangle> for PrimitiveEnum {
    fn from(value: Triangle) -> Self {
        PrimitiveEnum::Triangle(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Hands out monotonically increasing shape ids. Ids are never reused, even
/// after the owning scene is cleared. `u64::MAX` is never handed out; it only
/// marks an exhausted allocator.
#[derive(Clone, Debug, Default)]
pub struct ShapeIdAllocator {
    next: u64,
}

impl ShapeIdAllocator {
    pub fn new() -> Self {
        ShapeIdAllocator { next: 0 }
    }

    pub fn allocate(&mut self) -> Result<ShapeId, SceneError> {
        let id = ShapeId(self.next);
        self.next = self.next.checked_add(1).ok_or(SceneError::ShapeIdsExhausted)?;
        Ok(id)
    }

    /// Claims a caller-chosen id. Fails if `id` is below the next free id.
    pub fn reserve(&mut self, id: ShapeId) -> Result<ShapeId, SceneError> {
        if id.0 < self.next {
            return Err(SceneError::StaleShapeId {
                id,
                next: ShapeId(self.next),
            });
        }
        self.next = id.0.checked_add(1).ok_or(SceneError::ShapeIdsExhausted)?;
        Ok(id)
    }
}

/// A primitive placed in a scene, with its identity and surface material.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub material: Material,
    pub primitive: PrimitiveEnum,
}

impl Shape {
    pub fn new(id: ShapeId, material: Material, primitive: impl Into<PrimitiveEnum>) -> Self {
        Shape {
            id,
            material,
            primitive: primitive.into(),
        }
    }
}

/// The single entry point the scene uses to test a shape.
pub fn intersect(ray: Ray, shape: &Shape, tolerance: f32) -> Option<CollisionRecord> {
    shape.primitive.intersect(ray, tolerance)
}
