//! Homogeneous 4x4 transform builders.
//!
//! Each builder has two forms: one that allocates a fresh [`Matrix`] and an
//! `_assign` variant that overwrites an existing 4x4 matrix in place, for
//! tight loops that reuse a scratch transform. Translation lives in the
//! last column; rotations are the standard right-handed formulas with
//! angles in radians.

use crate::math::matrix::Matrix;

fn translation_array(x: f64, y: f64, z: f64) -> [f64; 16] {
    [
        1.0, 0.0, 0.0, x, //
        0.0, 1.0, 0.0, y, //
        0.0, 0.0, 1.0, z, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

fn rotation_x_array(t: f64) -> [f64; 16] {
    let (s, c) = t.sin_cos();
    [
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, -s, 0.0, //
        0.0, s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

fn rotation_y_array(t: f64) -> [f64; 16] {
    let (s, c) = t.sin_cos();
    [
        c, 0.0, s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        -s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

fn rotation_z_array(t: f64) -> [f64; 16] {
    let (s, c) = t.sin_cos();
    [
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Creates a translation matrix.
pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_array(4, 4, &translation_array(x, y, z))
}

/// Overwrites `m` with a translation matrix.
pub fn translation_assign(m: &mut Matrix, x: f64, y: f64, z: f64) {
    m.assign_from_array(&translation_array(x, y, z));
}

/// Creates a rotation matrix around the X axis (`t` in radians).
pub fn rotation_x(t: f64) -> Matrix {
    Matrix::from_array(4, 4, &rotation_x_array(t))
}

/// Overwrites `m` with a rotation around the X axis.
pub fn rotation_x_assign(m: &mut Matrix, t: f64) {
    m.assign_from_array(&rotation_x_array(t));
}

/// Creates a rotation matrix around the Y axis (`t` in radians).
pub fn rotation_y(t: f64) -> Matrix {
    Matrix::from_array(4, 4, &rotation_y_array(t))
}

/// Overwrites `m` with a rotation around the Y axis.
pub fn rotation_y_assign(m: &mut Matrix, t: f64) {
    m.assign_from_array(&rotation_y_array(t));
}

/// Creates a rotation matrix around the Z axis (`t` in radians).
pub fn rotation_z(t: f64) -> Matrix {
    Matrix::from_array(4, 4, &rotation_z_array(t))
}

/// Overwrites `m` with a rotation around the Z axis.
pub fn rotation_z_assign(m: &mut Matrix, t: f64) {
    m.assign_from_array(&rotation_z_array(t));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point3::Point3;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn apply(m: &Matrix, p: Point3) -> Point3 {
        let mut out = Matrix::new(4, 1);
        out.multiply(m, &p.to_homogeneous());
        Point3::from_homogeneous(&out)
    }

    #[test]
    fn test_translation_moves_point() {
        let m = translation(1.0, 2.0, 3.0);
        let p = apply(&m, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        // Right-handed: +x rotates to +y.
        let m = rotation_z(FRAC_PI_2);
        let p = apply(&m, Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_x_quarter_turn() {
        // Right-handed: +y rotates to +z.
        let m = rotation_x(FRAC_PI_2);
        let p = apply(&m, Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        // Right-handed: +z rotates to +x.
        let m = rotation_y(FRAC_PI_2);
        let p = apply(&m, Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_assign_variant_matches_builder() {
        let mut m = Matrix::new(4, 4);
        rotation_y_assign(&mut m, 0.7);
        assert_eq!(m, rotation_y(0.7));

        translation_assign(&mut m, -1.0, 0.5, 2.0);
        assert_eq!(m, translation(-1.0, 0.5, 2.0));
    }
}
