mod misc;
mod ray;
mod vec;

pub use misc::*;
pub use ray::*;
pub use vec::*;

/// Default tolerance for every equality, parallel and tangency test.
pub const DEFAULT_TOLERANCE: f32 = 0.0001;

/// Hit parameter standing in for "no hit", so hits can be compared with a
/// plain `<`.
pub const NO_INTERSECTION: f32 = f32::INFINITY;
