use log::{debug, warn};

use crate::camera::{trace, Viewport};
use crate::config::TraceConfig;
use crate::error::{CommandError, SceneError};
use crate::math::Ray;
use crate::parsing::{Command, PrimitiveData, Reply, ShapeData};
use crate::scene::Scene;

/// Message handler sitting behind the transport. Owns the scene, so a trace
/// and a mutation can never overlap.
pub struct Worker {
    scene: Scene,
    config: TraceConfig,
}

impl Worker {
    pub fn new(config: TraceConfig) -> Self {
        Worker {
            scene: Scene::new(config.tolerance, config.no_intersection),
            config,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Parses and runs one JSON message. Anything malformed comes back as an
    /// error reply.
    pub fn handle_json(&mut self, input: &str) -> Reply {
        match Command::from_json(input) {
            Ok(command) => self.handle(command),
            Err(e) => {
                let e = CommandError::from(e);
                warn!("rejected message: {}", e);
                Reply::error(e.to_string())
            }
        }
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        match self.try_handle(command) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("command failed: {}", e);
                Reply::error(e.to_string())
            }
        }
    }

    fn try_handle(&mut self, command: Command) -> Result<Reply, CommandError> {
        match command {
            Command::Viewport(data) => {
                let frame = trace(&Viewport::from(data), &self.scene, &self.config)?;
                Ok(Reply::Result {
                    width: frame.width,
                    height: frame.height,
                    data: frame.buffer,
                })
            }
            Command::Ray { origin, direction } => {
                let ray = Ray::new(origin.into(), direction.into());
                let message = match self.scene.cast_ray(ray) {
                    Some(hit) => format!("There was a collision at: {}", hit.record.point),
                    None => String::from("There was NO collision"),
                };
                debug!("{}", message);
                Ok(Reply::notification(message))
            }
            Command::Tri {
                a,
                b,
                c,
                shape_id,
                material,
            } => self.add_shape(ShapeData {
                primitive: PrimitiveData::Triangle { a, b, c },
                shape_id,
                material,
            }),
            Command::Sphere {
                center,
                radius,
                shape_id,
                material,
            } => self.add_shape(ShapeData {
                primitive: PrimitiveData::Sphere { center, radius },
                shape_id,
                material,
            }),
            Command::ClearShapes => {
                self.scene.clear();
                Ok(Reply::notification("Shapes have been cleared"))
            }
        }
    }

    fn add_shape(&mut self, shape: ShapeData) -> Result<Reply, CommandError> {
        let material = shape
            .material
            .map(Into::into)
            .unwrap_or(self.config.default_material);
        let primitive = shape
            .primitive
            .transform(self.config.tolerance)
            .map_err(SceneError::from)?;
        let id = self.scene.add_shape(primitive, material, shape.id())?;
        Ok(Reply::notification(format!("Added shape {}", id)))
    }
}

impl Default for Worker {
    fn default() -> Self {
        Worker::new(TraceConfig::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SPHERE: &str = r#"{"type": "sphere", "center": {"x": 0, "y": 0, "z": -5}, "radius": 1}"#;
    const TRI: &str = r#"{"type": "tri", "a": {"x": -1, "y": -1, "z": -3}, "b": {"x": 1, "y": -1, "z": -3}, "c": {"x": 0, "y": 1, "z": -3}}"#;
    const RAY: &str = r#"{"type": "ray", "origin": {"x": 0, "y": 0, "z": 0}, "direction": {"x": 0, "y": 0, "z": -1}}"#;

    fn message(reply: Reply) -> String {
        match reply {
            Reply::Notification { message } | Reply::Error { message } => message,
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[test]
    fn test_ray_reports_collision() {
        let mut worker = Worker::default();
        assert_eq!(message(worker.handle_json(RAY)), "There was NO collision");

        assert!(!worker.handle_json(SPHERE).is_error());
        assert_eq!(
            message(worker.handle_json(RAY)),
            "There was a collision at: {x: 0 y: 0 z: -4}"
        );

        assert!(!worker.handle_json(TRI).is_error());
        assert_eq!(
            message(worker.handle_json(RAY)),
            "There was a collision at: {x: 0 y: 0 z: -3}"
        );
    }

    #[test]
    fn test_clear_shapes() {
        let mut worker = Worker::default();
        worker.handle_json(SPHERE);
        assert_eq!(worker.scene().len(), 1);
        let reply = worker.handle_json(r#"{"type": "clearshapes"}"#);
        assert_eq!(message(reply), "Shapes have been cleared");
        assert!(worker.scene().is_empty());
        assert!(!worker.handle_json(r#"{"type": "clearshapes"}"#).is_error());
    }

    #[test]
    fn test_viewport_result() {
        let mut worker = Worker::default();
        worker.handle_json(r#"{"type": "sphere", "c": {"x": 0, "y": 0, "z": -10}, "r": 8}"#);
        let reply = worker.handle_json(
            r#"{"type": "viewport", "width": 4, "height": 3, "top": 1, "bottom": -1,
                "left": -1, "right": 1, "near": 1, "far": 100, "fov": 45}"#,
        );
        match reply {
            Reply::Result {
                width,
                height,
                data,
            } => {
                assert_eq!((width, height), (4, 3));
                assert_eq!(data.len(), 4 * 3 * 4);
                assert!(data.chunks(4).all(|px| px[3] == 255));
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_errors() {
        let mut worker = Worker::default();
        assert!(worker.handle_json(r#"{"type": "teapot"}"#).is_error());
        assert!(worker.handle_json(r#"{"type": "sphere", "radius": 1}"#).is_error());
        assert!(worker
            .handle_json(r#"{"type": "sphere", "center": {"x": 0, "y": 0, "z": 0}, "radius": -1}"#)
            .is_error());
        assert!(worker
            .handle_json(
                r#"{"type": "tri", "a": {"x": 0, "y": 0, "z": 0}, "b": {"x": 0, "y": 0, "z": 0}, "c": {"x": 1, "y": 1, "z": 1}}"#
            )
            .is_error());
        assert!(worker
            .handle_json(
                r#"{"type": "viewport", "width": 0, "height": 3, "top": 1, "bottom": -1,
                    "left": -1, "right": 1, "near": 1, "far": 100, "fov": 45}"#
            )
            .is_error());
        assert!(worker
            .handle_json(
                r#"{"type": "viewport", "width": 100000, "height": 100000, "top": 1, "bottom": -1,
                    "left": -1, "right": 1, "near": 1, "far": 100, "fov": 45}"#
            )
            .is_error());
        assert!(worker.scene().is_empty());
    }

    #[test]
    fn test_shape_ids() {
        let mut worker = Worker::default();
        let with_id = r#"{"type": "sphere", "c": {"x": 0, "y": 0, "z": -5}, "r": 1, "shapeId": 4}"#;
        assert_eq!(message(worker.handle_json(with_id)), "Added shape 4");
        assert_eq!(message(worker.handle_json(SPHERE)), "Added shape 5");
        assert!(worker.handle_json(with_id).is_error());
        assert_eq!(worker.scene().len(), 2);
    }

    #[test]
    fn test_largest_shape_id_is_rejected() {
        let mut worker = Worker::default();
        let max_id = r#"{"type": "sphere", "c": {"x": 0, "y": 0, "z": -5}, "r": 1, "shapeId": 18446744073709551615}"#;
        assert!(worker.handle_json(max_id).is_error());
        assert!(worker.scene().is_empty());
        // the allocator is untouched, so plain adds keep working
        assert_eq!(message(worker.handle_json(SPHERE)), "Added shape 0");
    }
}
