use crate::error::GeometryError;
use crate::geometry::{CollisionRecord, Primitive};
use crate::math::{Ray, Vector, DEFAULT_TOLERANCE};

/// Immutable triangle. The unit normal is computed once from the vertices,
/// so there is no way to move a vertex and leave the normal stale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: Vector,
    b: Vector,
    c: Vector,
    normal: Vector,
}

impl Triangle {
    pub fn new(a: Vector, b: Vector, c: Vector) -> Result<Triangle, GeometryError> {
        Triangle::new_with_tolerance(a, b, c, DEFAULT_TOLERANCE)
    }

    /// Fails when the vertices span less than `tolerance` of (doubled) area.
    pub fn new_with_tolerance(
        a: Vector,
        b: Vector,
        c: Vector,
        tolerance: f32,
    ) -> Result<Triangle, GeometryError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(GeometryError::NonFinite(Self::NAME));
        }
        let cross = (a - b).cross(a - c);
        if cross.magnitude() < tolerance {
            return Err(GeometryError::DegenerateTriangle);
        }
        Ok(Triangle {
            a,
            b,
            c,
            normal: cross.normalized(),
        })
    }
    pub const NAME: &'static str = "Triangle";

    pub fn normal(&self) -> Vector {
        self.normal
    }
}

impl Primitive for Triangle {
    // Moller-Trumbore
    fn intersect(&self, r: Ray, tolerance: f32) -> Option<CollisionRecord> {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;

        let p = r.direction.cross(edge2);
        let det = edge1 * p;
        // ray is parallel to the triangle's plane
        if det.abs() < tolerance {
            return None;
        }

        let f = 1.0 / det;
        let s = r.origin - self.a;
        let u = f * (s * p);
        if u < 0.0 || u > 1.0 {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * (r.direction * q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let time = f * (edge2 * q);
        if time <= 0.0 {
            return None;
        }

        Some(CollisionRecord::new(
            time,
            r.point_at_parameter(time),
            self.facing_normal(r),
        ))
    }

    fn normal_at(&self, _point: Vector) -> Vector {
        self.normal
    }
}

impl Triangle {
    /// The stored normal, flipped if needed so it faces against `r`.
    fn facing_normal(&self, r: Ray) -> Vector {
        if r.direction * self.normal > 0.0 {
            -self.normal
        } else {
            self.normal
        }
    }
}
