use crate::error::GeometryError;
use crate::geometry::{CollisionRecord, Primitive};
use crate::math::{Ray, Vector};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Vector,
}

impl Sphere {
    pub fn new(origin: Vector, radius: f32) -> Result<Sphere, GeometryError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        if !origin.is_finite() {
            return Err(GeometryError::NonFinite(Self::NAME));
        }
        Ok(Sphere { radius, origin })
    }
    pub const NAME: &'static str = "Sphere";

    fn half_chord(&self, closest: Vector) -> f32 {
        let d = (closest - self.origin).magnitude();
        (self.radius * self.radius - d * d).max(0.0).sqrt()
    }
}

impl Primitive for Sphere {
    // Geometric method, worked in unit-direction space. Distances found
    // there are divided by the direction's length on the way out so the
    // returned time is a parameter of `r` itself.
    fn intersect(&self, r: Ray, tolerance: f32) -> Option<CollisionRecord> {
        let dir_len = r.direction.magnitude();
        if dir_len < tolerance {
            return None;
        }
        let dir = r.direction / dir_len;

        let to_center = self.origin - r.origin;
        let center_dist = to_center.magnitude();
        // distance along the ray to the point of closest approach
        let along = to_center * dir;

        let distance = if along < 0.0 {
            // center is behind the origin
            if center_dist > self.radius {
                return None;
            } else if (center_dist - self.radius).abs() < tolerance {
                // origin sits on the surface
                return Some(CollisionRecord::new(
                    0.0,
                    r.origin,
                    (r.origin - self.origin).normalized(),
                ));
            }
            // origin inside, exit point is ahead
            let closest = r.origin + dir * along;
            let h = self.half_chord(closest);
            ((closest - r.origin).magnitude() - h).abs()
        } else {
            let closest = r.origin + dir * along;
            if (self.origin - closest).magnitude() > self.radius {
                return None;
            }
            let h = self.half_chord(closest);
            let to_closest = (closest - r.origin).magnitude();
            if center_dist > self.radius {
                to_closest - h
            } else {
                to_closest + h
            }
        };

        let time = distance / dir_len;
        let point = r.point_at_parameter(time);
        Some(CollisionRecord::new(time, point, self.normal_at(point)))
    }

    fn normal_at(&self, point: Vector) -> Vector {
        (point - self.origin).normalized()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::DEFAULT_TOLERANCE;

    fn forward_ray() -> Ray {
        Ray::new(Vector::zero(), Vector::new(0.0, 0.0, -1.0))
    }

    fn hit_point(sphere: Sphere, ray: Ray) -> Option<Vector> {
        sphere
            .intersect(ray, DEFAULT_TOLERANCE)
            .map(|hit| ray.point_at_parameter(hit.time))
    }

    #[test]
    fn test_sphere_in_front() {
        let sphere = Sphere::new(Vector::new(0.0, 0.0, -5.0), 1.0).unwrap();
        let hit = sphere.intersect(forward_ray(), DEFAULT_TOLERANCE).unwrap();
        assert!(hit.point.approx_eq(Vector::new(0.0, 0.0, -4.0), DEFAULT_TOLERANCE), "{:?}", hit);
        assert!(hit.normal.approx_eq(Vector::new(0.0, 0.0, 1.0), DEFAULT_TOLERANCE), "{:?}", hit);
        assert!((hit.time - 4.0).abs() < DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_sphere_encloses_origin() {
        let sphere = Sphere::new(Vector::zero(), 1.0).unwrap();
        let point = hit_point(sphere, forward_ray()).unwrap();
        assert!(point.approx_eq(Vector::new(0.0, 0.0, -1.0), DEFAULT_TOLERANCE), "{:?}", point);
    }

    #[test]
    fn test_origin_inside_center_behind() {
        let sphere = Sphere::new(Vector::new(0.0, 0.0, 0.5), 1.0).unwrap();
        let hit = sphere.intersect(forward_ray(), DEFAULT_TOLERANCE).unwrap();
        assert!(hit.point.approx_eq(Vector::new(0.0, 0.0, -0.5), DEFAULT_TOLERANCE), "{:?}", hit);
        // outward normal, even from inside
        assert!(hit.normal.approx_eq(Vector::new(0.0, 0.0, -1.0), DEFAULT_TOLERANCE), "{:?}", hit);
    }

    #[test]
    fn test_origin_on_surface() {
        let sphere = Sphere::new(Vector::new(0.0, 0.0, 1.0), 1.0).unwrap();
        let hit = sphere.intersect(forward_ray(), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(hit.time, 0.0);
        assert!(hit.point.approx_eq(Vector::zero(), DEFAULT_TOLERANCE));
        assert!(hit.normal.approx_eq(Vector::new(0.0, 0.0, -1.0), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_no_intersection() {
        let sphere = Sphere::new(Vector::new(0.0, 5.0, -5.0), 0.5).unwrap();
        assert!(sphere.intersect(forward_ray(), DEFAULT_TOLERANCE).is_none());

        let behind = Sphere::new(Vector::new(0.0, 0.0, 5.0), 1.0).unwrap();
        assert!(behind.intersect(forward_ray(), DEFAULT_TOLERANCE).is_none());
    }

    #[test]
    fn test_tangent_ray() {
        let sphere = Sphere::new(Vector::new(1.0, 0.0, -5.0), 1.0).unwrap();
        let hit = sphere.intersect(forward_ray(), DEFAULT_TOLERANCE).unwrap();
        assert!(hit.point.approx_eq(Vector::new(0.0, 0.0, -5.0), 0.001), "{:?}", hit);
    }

    #[test]
    fn test_unnormalized_direction() {
        let sphere = Sphere::new(Vector::new(0.0, 0.0, -5.0), 1.0).unwrap();
        let ray = Ray::new(Vector::zero(), Vector::new(0.0, 0.0, -2.0));
        let hit = sphere.intersect(ray, DEFAULT_TOLERANCE).unwrap();
        assert!((hit.time - 2.0).abs() < DEFAULT_TOLERANCE);
        assert!(ray.point_at_parameter(hit.time).approx_eq(Vector::new(0.0, 0.0, -4.0), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_offset_origin() {
        let sphere = Sphere::new(Vector::new(3.0, 0.0, -5.0), 1.0).unwrap();
        let ray = Ray::new(Vector::new(3.0, 0.0, 0.0), Vector::new(0.0, 0.0, -1.0));
        let point = hit_point(sphere, ray).unwrap();
        assert!(point.approx_eq(Vector::new(3.0, 0.0, -4.0), DEFAULT_TOLERANCE), "{:?}", point);
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(
            Sphere::new(Vector::zero(), -1.0),
            Err(GeometryError::InvalidRadius(-1.0))
        );
        assert!(Sphere::new(Vector::zero(), 0.0).is_err());
        assert!(Sphere::new(Vector::zero(), f32::NAN).is_err());
    }
}
