use serde::{Deserialize, Serialize};

use crate::camera::Viewport;
use crate::error::GeometryError;
use crate::geometry::{PrimitiveEnum, ShapeId, Sphere, Triangle};
use crate::material::Material;
use crate::math::Vector;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorData {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<VectorData> for Vector {
    fn from(v: VectorData) -> Vector {
        Vector::new(v.x, v.y, v.z)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialData {
    pub ambient: VectorData,
    pub diffuse: VectorData,
}

impl From<MaterialData> for Material {
    fn from(data: MaterialData) -> Material {
        Material::new(data.ambient.into(), data.diffuse.into())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportData {
    pub width: u32,
    pub height: u32,
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
    pub near: f32,
    pub far: f32,
    pub fov: f32,
}

impl From<ViewportData> for Viewport {
    fn from(data: ViewportData) -> Viewport {
        Viewport {
            width: data.width,
            height: data.height,
            top: data.top,
            bottom: data.bottom,
            left: data.left,
            right: data.right,
            near: data.near,
            far: data.far,
            fov: data.fov,
        }
    }
}

/// Shape payload of a `tri` or `sphere` command, before it is placed in a
/// scene.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeData {
    pub primitive: PrimitiveData,
    pub shape_id: Option<u64>,
    pub material: Option<MaterialData>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PrimitiveData {
    Sphere {
        center: VectorData,
        radius: f32,
    },
    Triangle {
        a: VectorData,
        b: VectorData,
        c: VectorData,
    },
}

impl PrimitiveData {
    pub fn transform(self, tolerance: f32) -> Result<PrimitiveEnum, GeometryError> {
        match self {
            Self::Sphere { center, radius } => Ok(Sphere::new(center.into(), radius)?.into()),
            Self::Triangle { a, b, c } => {
                Ok(Triangle::new_with_tolerance(a.into(), b.into(), c.into(), tolerance)?.into())
            }
        }
    }
}

impl ShapeData {
    pub fn id(&self) -> Option<ShapeId> {
        self.shape_id.map(ShapeId)
    }
}
