use crate::material::{Material, PointLight, ShadingMode};
use crate::math::{DEFAULT_TOLERANCE, NO_INTERSECTION};

/// Knobs threaded through the scene, the intersection tests and the shader.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceConfig {
    pub tolerance: f32,
    pub no_intersection: f32,
    pub light: PointLight,
    pub clamp_diffuse: bool,
    pub shading: ShadingMode,
    /// Used for shapes that arrive without a material of their own.
    pub default_material: Material,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            tolerance: DEFAULT_TOLERANCE,
            no_intersection: NO_INTERSECTION,
            light: PointLight::default(),
            clamp_diffuse: true,
            shading: ShadingMode::default(),
            default_material: Material::default(),
        }
    }
}
