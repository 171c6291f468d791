pub mod commands;
pub mod primitives;

use std::{error::Error, fs::File, io::Read, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use commands::*;
pub use primitives::*;

use crate::{
    config::TraceConfig, error::ConfigError, material::PointLight, material::ShadingMode,
};

/// On-disk form of [`TraceConfig`]. Every field is optional and falls back
/// to the default.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    pub tolerance: Option<f32>,
    pub light: Option<VectorData>,
    pub clamp_diffuse: Option<bool>,
    pub shading: Option<ShadingMode>,
    pub default_material: Option<MaterialData>,
}

impl TryFrom<ConfigData> for TraceConfig {
    type Error = ConfigError;

    fn try_from(data: ConfigData) -> Result<Self, ConfigError> {
        let default = TraceConfig::default();
        let tolerance = data.tolerance.unwrap_or(default.tolerance);
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(TraceConfig {
            tolerance,
            no_intersection: default.no_intersection,
            light: data
                .light
                .map(|position| PointLight {
                    position: position.into(),
                })
                .unwrap_or(default.light),
            clamp_diffuse: data.clamp_diffuse.unwrap_or(default.clamp_diffuse),
            shading: data.shading.unwrap_or(default.shading),
            default_material: data
                .default_material
                .map(Into::into)
                .unwrap_or(default.default_material),
        })
    }
}

pub fn load_json<T, P>(path: P) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut input = String::new();
    File::open(path)?.read_to_string(&mut input)?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}
