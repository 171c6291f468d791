use std::path::Path;
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::config::TraceConfig;
use crate::error::TraceError;
use crate::material::{shade, to_rgba8};
use crate::math::{deg_to_rad, Ray, Vector};
use crate::scene::Scene;

/// Largest frame `trace` will allocate, in pixels (8192 x 8192).
pub const MAX_PIXELS: u64 = 8192 * 8192;

/// Image plane and pinhole camera parameters. `right` and `top` are full
/// extents; the camera sits at the world origin looking down -z.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
    pub near: f32,
    pub far: f32,
    /// Horizontal field of view in degrees. The vertical one follows from
    /// the aspect ratio.
    pub fov: f32,
}

impl Viewport {
    pub fn validate(&self) -> Result<(), TraceError> {
        if self.width == 0 || self.height == 0 {
            return Err(TraceError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        if self.width as u64 * self.height as u64 > MAX_PIXELS {
            return Err(TraceError::ViewportTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if !self.fov.is_finite() {
            return Err(TraceError::InvalidFov(self.fov));
        }
        Ok(())
    }

    pub fn camera(&self) -> Camera {
        let fov_x = deg_to_rad(self.fov);
        let fov_y = (self.height as f32 / self.width as f32) * fov_x;
        Camera {
            half_x: self.right * 0.5,
            half_y: self.top * 0.5,
            x_inc: fov_x.tan() / self.width as f32,
            y_inc: fov_y.tan() / self.height as f32,
        }
    }
}

/// Maps pixel coordinates to primary rays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub half_x: f32,
    pub half_y: f32,
    pub x_inc: f32,
    pub y_inc: f32,
}

impl Camera {
    /// Ray through pixel (`i`, `j`), `j` counting rows from the top.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let x = -self.half_x + i as f32 * self.x_inc;
        let y = self.half_y - j as f32 * self.y_inc;
        Ray::new(Vector::zero(), Vector::new(x, y, -1.0).normalized())
    }
}

/// Row-major RGBA8 pixel buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub buffer: Vec<u8>,
}

impl Frame {
    /// Fully transparent black frame.
    pub fn new(width: u32, height: u32) -> Frame {
        Frame {
            width,
            height,
            buffer: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn index(&self, i: u32, j: u32) -> usize {
        (i as usize + j as usize * self.width as usize) * 4
    }

    pub fn pixel(&self, i: u32, j: u32) -> [u8; 4] {
        let idx = self.index(i, j);
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.buffer[idx..idx + 4]);
        px
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.buffer,
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

/// Casts one ray per pixel and shades every hit. Rows are filled in
/// parallel; each one only reads the scene, so the output does not depend on
/// scheduling.
pub fn trace(viewport: &Viewport, scene: &Scene, config: &TraceConfig) -> Result<Frame, TraceError> {
    viewport.validate()?;
    let camera = viewport.camera();
    let mut frame = Frame::new(viewport.width, viewport.height);
    let row_len = viewport.width as usize * 4;

    info!(
        "tracing {}x{} viewport against {} shapes",
        viewport.width,
        viewport.height,
        scene.len()
    );
    let start = Instant::now();

    frame
        .buffer
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(j, row)| {
            for i in 0..viewport.width {
                let ray = camera.get_ray(i, j as u32);
                if let Some(hit) = scene.cast_ray(ray) {
                    let Some(shape) = scene.get(hit.index) else {
                        continue;
                    };
                    let color = shade(
                        &hit.record,
                        &shape.material,
                        &config.light,
                        config.shading,
                        config.clamp_diffuse,
                    );
                    let idx = i as usize * 4;
                    row[idx..idx + 4].copy_from_slice(&to_rgba8(color));
                }
            }
        });

    info!("traced in {:?}", start.elapsed());
    Ok(frame)
}
