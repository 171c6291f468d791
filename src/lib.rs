pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod material;
pub mod math;
pub mod parsing;
pub mod scene;
pub mod worker;

pub use camera::{trace, Camera, Frame, Viewport};
pub use config::TraceConfig;
pub use scene::{Hit, Scene};
pub use worker::Worker;
