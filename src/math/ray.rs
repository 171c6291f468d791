use super::Vector;

/// Half-line from `origin` along `direction`. The direction is not required
/// to be unit length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector,
    pub direction: Vector,
}

impl Ray {
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f32) -> Vector {
        self.origin + self.direction * time
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Vector::zero(), Vector::zero())
    }
}
