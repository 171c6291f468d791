//! Error types for scene construction, tracing, configuration and command
//! handling.

use thiserror::Error;

use crate::geometry::ShapeId;

/// Geometry rejected at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("sphere radius must be finite and greater than zero, got {0}")]
    InvalidRadius(f32),

    #[error("triangle has zero area")]
    DegenerateTriangle,

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Shape ids are never reused, so anything below the allocator's next id
    /// has already been handed out.
    #[error("shape id {id} was already allocated (next free id is {next})")]
    StaleShapeId { id: ShapeId, next: ShapeId },

    #[error("no shape ids left to allocate")]
    ShapeIdsExhausted,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    #[error("viewport must be at least 1x1 pixels, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    #[error("viewport {width}x{height} exceeds the {} pixel limit", crate::camera::MAX_PIXELS)]
    ViewportTooLarge { width: u32, height: u32 },

    #[error("viewport field of view must be finite, got {0}")]
    InvalidFov(f32),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and greater than zero, got {0}")]
    InvalidTolerance(f32),
}

/// Anything that turns a wire command into an error reply.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("malformed command: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}
