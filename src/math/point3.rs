use std::ops::{Add, Div, Mul, Neg, Sub};

use super::matrix::Matrix;

/// A 3D point (or vector) with `f64` components.
///
/// Plain value semantics; freely copied. The evaluators accumulate into a
/// zeroed point with [`Point3::fmad`], one control point at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Fused multiply-add: `self += src * s`, componentwise.
    pub fn fmad(&mut self, src: Point3, s: f64) {
        self.x += src.x * s;
        self.y += src.y * s;
        self.z += src.z * s;
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Builds the homogeneous 4x1 column matrix `(x, y, z, 1)`.
    pub fn to_homogeneous(self) -> Matrix {
        Matrix::from_array(4, 1, &[self.x, self.y, self.z, 1.0])
    }

    /// Reads a point back out of a homogeneous 4x1 column matrix.
    pub fn from_homogeneous(m: &Matrix) -> Self {
        Self::new(m.get(0, 0), m.get(1, 0), m.get(2, 0))
    }
}

/// Component-wise addition of two points.
impl Add<Point3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// Component-wise subtraction of two points.
impl Sub<Point3> for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Scalar multiplication of a point.
impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Scalar division of a point.
impl Div<f64> for Point3 {
    type Output = Point3;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

/// Negation of a point.
impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmad() {
        let mut p = Point3::ZERO;
        p.fmad(Point3::new(1.0, 2.0, 3.0), 2.0);
        p.fmad(Point3::new(0.5, 0.5, 0.5), -2.0);
        assert_eq!(p, Point3::new(1.0, 3.0, 5.0));
    }

    #[test]
    fn test_cross_right_handed() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_homogeneous_round_trip() {
        let p = Point3::new(1.5, -2.0, 3.25);
        let m = p.to_homogeneous();
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 1);
        assert_eq!(m.get(3, 0), 1.0);
        assert_eq!(Point3::from_homogeneous(&m), p);
    }
}
