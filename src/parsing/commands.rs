use serde::{Deserialize, Serialize};

use super::primitives::{MaterialData, VectorData, ViewportData};

/// One message from the transport. Tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Command {
    Viewport(ViewportData),
    Ray {
        #[serde(alias = "o")]
        origin: VectorData,
        #[serde(alias = "dir")]
        direction: VectorData,
    },
    Tri {
        a: VectorData,
        b: VectorData,
        c: VectorData,
        #[serde(rename = "shapeId", default, skip_serializing_if = "Option::is_none")]
        shape_id: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<MaterialData>,
    },
    Sphere {
        #[serde(alias = "c")]
        center: VectorData,
        #[serde(alias = "r")]
        radius: f32,
        #[serde(rename = "shapeId", default, skip_serializing_if = "Option::is_none")]
        shape_id: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<MaterialData>,
    },
    ClearShapes,
}

impl Command {
    pub fn from_json(input: &str) -> Result<Command, serde_json::Error> {
        serde_json::from_str(input)
    }
}

/// One message back to the transport. Tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Reply {
    /// Rendered frame, row-major RGBA8.
    Result {
        width: u32,
        height: u32,
        data: Vec<u8>,
    },
    Notification {
        message: String,
    },
    Error {
        message: String,
    },
}

impl Reply {
    pub fn notification(message: impl Into<String>) -> Reply {
        Reply::Notification {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Reply {
        Reply::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error { .. })
    }
}
