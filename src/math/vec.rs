use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use nalgebra::Vector4;

/// Homogeneous 4 component vector. Geometry only ever reads x, y and z;
/// `w` is carried along and only `magnitude` and `normalized` look at it.
#[derive(Copy, Clone, PartialEq)]
pub struct Vector(pub Vector4<f32>);

impl Vector {
    pub fn new(x: f32, y: f32, z: f32) -> Vector {
        Vector(Vector4::new(x, y, z, 0.0))
    }
    pub fn new_with_w(x: f32, y: f32, z: f32, w: f32) -> Vector {
        Vector(Vector4::new(x, y, z, w))
    }
    pub fn zero() -> Vector {
        Vector(Vector4::zeros())
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }
}

impl Vector {
    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.0.x
    }
    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.0.y
    }
    #[inline(always)]
    pub fn z(&self) -> f32 {
        self.0.z
    }
    #[inline(always)]
    pub fn w(&self) -> f32 {
        self.0.w
    }

    // add, subtract, scale, multiply and divide all drop w to 0.

    pub fn add(&self, other: Vector) -> Vector {
        Vector::new(self.x() + other.x(), self.y() + other.y(), self.z() + other.z())
    }

    pub fn subtract(&self, other: Vector) -> Vector {
        Vector::new(self.x() - other.x(), self.y() - other.y(), self.z() - other.z())
    }

    pub fn scale(&self, s: f32) -> Vector {
        Vector::new(self.x() * s, self.y() * s, self.z() * s)
    }

    /// Component-wise product.
    pub fn multiply(&self, other: Vector) -> Vector {
        Vector::new(self.x() * other.x(), self.y() * other.y(), self.z() * other.z())
    }

    /// Component-wise quotient. Follows IEEE semantics for zero components.
    pub fn divide(&self, other: Vector) -> Vector {
        Vector::new(self.x() / other.x(), self.y() / other.y(), self.z() / other.z())
    }

    pub fn dot(&self, other: Vector) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    pub fn cross(&self, other: Vector) -> Vector {
        let (x1, y1, z1) = (self.x(), self.y(), self.z());
        let (x2, y2, z2) = (other.x(), other.y(), other.z());
        Vector::new(y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - x2 * y1)
    }

    /// Length including the `w` component.
    pub fn magnitude(&self) -> f32 {
        self.0.norm()
    }

    /// Divides every component, `w` included, by the magnitude. A zero vector
    /// is divided by 1 instead and comes back unchanged.
    pub fn normalized(&self) -> Vector {
        let mag = self.magnitude();
        let mag = if mag == 0.0 { 1.0 } else { mag };
        Vector(self.0 / mag)
    }

    /// Projection of `self` onto `onto`. Projecting onto the zero vector
    /// yields the zero vector.
    pub fn projection(&self, onto: Vector) -> Vector {
        let denom = onto.dot(onto);
        let denom = if denom == 0.0 { 1.0 } else { denom };
        onto.scale(self.dot(onto) / denom)
    }

    /// True when every component, `w` included, differs by strictly less
    /// than `tolerance`.
    pub fn approx_eq(&self, other: Vector, tolerance: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() < tolerance)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Vector::zero()
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .field(&self.w())
            .finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x: {} y: {} z: {}}}", self.x(), self.y(), self.z())
    }
}

// dot product
impl Mul for Vector {
    type Output = f32;
    fn mul(self, other: Vector) -> f32 {
        self.dot(other)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;
    fn mul(self, other: f32) -> Vector {
        self.scale(other)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;
    fn mul(self, other: Vector) -> Vector {
        other.scale(self)
    }
}

impl Div<f32> for Vector {
    type Output = Vector;
    fn div(self, other: f32) -> Vector {
        self.scale(1.0 / other)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Vector {
        Vector::add(&self, other)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x(), -self.y(), -self.z())
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, other: Vector) -> Vector {
        self.subtract(other)
    }
}

impl From<[f32; 3]> for Vector {
    fn from(other: [f32; 3]) -> Vector {
        Vector::new(other[0], other[1], other[2])
    }
}

impl From<[f32; 4]> for Vector {
    fn from(other: [f32; 4]) -> Vector {
        Vector::new_with_w(other[0], other[1], other[2], other[3])
    }
}
