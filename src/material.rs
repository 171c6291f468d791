use serde::{Deserialize, Serialize};

use crate::geometry::CollisionRecord;
use crate::math::Vector;

/// Surface colors, each channel in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: Vector,
    pub diffuse: Vector,
}

impl Material {
    pub fn new(ambient: Vector, diffuse: Vector) -> Material {
        Material { ambient, diffuse }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::new(Vector::new(0.2, 0.0, 0.0), Vector::new(0.8, 0.0, 0.0))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vector,
}

impl Default for PointLight {
    fn default() -> Self {
        PointLight {
            position: Vector::new(10.0, 10.0, 10.0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    #[default]
    Lambert,
    /// Debug view, paints the surface normal mapped from `[-1, 1]` to `[0, 1]`.
    Normals,
}

/// Ambient plus N.L diffuse from a single point light. No shadows, no
/// attenuation, no specular. With `clamp_diffuse` the cosine term is floored
/// at zero, otherwise back-facing light darkens the ambient term.
pub fn lambert(hit: &CollisionRecord, material: &Material, light: &PointLight, clamp_diffuse: bool) -> Vector {
    let dir_to_light = (light.position - hit.point).normalized();
    let mut n_dot_l = hit.normal * dir_to_light;
    if clamp_diffuse {
        n_dot_l = n_dot_l.max(0.0);
    }
    material.ambient + material.diffuse * n_dot_l
}

pub fn shade(
    hit: &CollisionRecord,
    material: &Material,
    light: &PointLight,
    mode: ShadingMode,
    clamp_diffuse: bool,
) -> Vector {
    match mode {
        ShadingMode::Lambert => lambert(hit, material, light, clamp_diffuse),
        ShadingMode::Normals => (hit.normal + Vector::new(1.0, 1.0, 1.0)) * 0.5,
    }
}

/// Scales a `[0, 1]` color to opaque RGBA bytes, clamping every channel.
pub fn to_rgba8(color: Vector) -> [u8; 4] {
    let channel = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    [channel(color.x()), channel(color.y()), channel(color.z()), 255]
}
