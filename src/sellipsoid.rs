//! Superquadric ellipsoid evaluation over a latitude/longitude grid.
//!
//! The parametrization uses signed-power trigonometric functions so the
//! fractional shape exponents stay defined and correctly signed in every
//! octant. Latitude runs from `+V_INIT` down to `-V_INIT`; both pole rows
//! collapse to a single point each, and the longitude seam at `u = 2*pi`
//! is never materialized (the closed triangulation wraps back to `u = 0`).

use std::f64::consts::{FRAC_PI_2, PI};

use crate::math::point3::Point3;
use crate::math::scalar::sgn;
use crate::mesh::Mesh;

/// Signed power of cosine: `sgn(cos w) * |cos w|^m`.
fn c(w: f64, m: f64) -> f64 {
    sgn(w.cos()) * w.cos().abs().powf(m)
}

/// Signed power of sine: `sgn(sin w) * |sin w|^m`.
fn s(w: f64, m: f64) -> f64 {
    sgn(w.sin()) * w.sin().abs().powf(m)
}

/// A superquadric ellipsoid: two shape exponents and three semi-axis
/// scales.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sellipsoid {
    pub s1: f64,
    pub s2: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for Sellipsoid {
    /// The unit sphere: both exponents 1, all semi-axes 1.
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0, 1.0)
    }
}

impl Sellipsoid {
    /// Latitude of the first pole row. The grid walks from `+V_INIT` down
    /// to `-V_INIT`.
    pub const V_INIT: f64 = FRAC_PI_2;

    pub fn new(s1: f64, s2: f64, a: f64, b: f64, c: f64) -> Self {
        Self { s1, s2, a, b, c }
    }

    fn du(num_u: usize) -> f64 {
        (2.0 * PI) / (num_u as f64 - 1.0)
    }

    fn dv(num_v: usize) -> f64 {
        -sgn(Self::V_INIT) * (-Self::V_INIT - Self::V_INIT).abs() / (num_v as f64 - 1.0)
    }

    /// Evaluates the surface point at longitude `u`, latitude `v`.
    pub fn point_at(&self, u: f64, v: f64) -> Point3 {
        Point3::new(
            self.a * c(v, self.s1) * c(u, self.s2),
            self.b * c(v, self.s1) * s(u, self.s2),
            self.c * s(v, self.s1),
        )
    }

    /// Evaluates the surface normal at longitude `u`, latitude `v`: the
    /// same signed-power form with exponents `2 - s1` / `2 - s2` and
    /// reciprocal semi-axes. Unnormalized.
    pub fn normal_at(&self, u: f64, v: f64) -> Point3 {
        Point3::new(
            (1.0 / self.a) * c(v, 2.0 - self.s1) * c(u, 2.0 - self.s2),
            (1.0 / self.b) * c(v, 2.0 - self.s1) * s(u, 2.0 - self.s2),
            (1.0 / self.c) * s(v, 2.0 - self.s1),
        )
    }

    /// Samples the pole-bearing closed grid into `mesh` and records the
    /// resolution: one point for the `+V_INIT` pole, `num_v - 2` latitude
    /// rings of `num_u - 1` points (the `u = 2*pi` column repeats `u = 0`
    /// and is omitted), then one point for the `-V_INIT` pole.
    ///
    /// Total point count is `2 + (num_v - 2) * (num_u - 1)`. Callers
    /// guarantee `num_u >= 2` and `num_v >= 2`.
    pub fn mesh_points(&self, mesh: &mut Mesh, num_u: usize, num_v: usize) {
        self.sample_grid(num_u, num_v, |u, v| mesh.push_point(self.point_at(u, v)));
        mesh.set_resolution(num_u, num_v);
    }

    /// Computes one normal per mesh point, walking the same grid order as
    /// [`Sellipsoid::mesh_points`].
    pub fn mesh_normals(&self, mesh: &mut Mesh) {
        let (num_u, num_v) = (mesh.num_u(), mesh.num_v());
        let mut normals = Vec::new();
        self.sample_grid(num_u, num_v, |u, v| normals.push(self.normal_at(u, v)));
        for normal in normals {
            mesh.push_normal(normal);
        }
    }

    /// Walks the pole/ring/pole grid layout, invoking `emit` once per
    /// stored sample. Integer row/column counters drive the loops so
    /// floating-point drift cannot change the number of samples.
    fn sample_grid<F: FnMut(f64, f64)>(&self, num_u: usize, num_v: usize, mut emit: F) {
        let du = Self::du(num_u);
        let dv = Self::dv(num_v);

        // The lone point at the first pole.
        emit(0.0, Self::V_INIT);

        let mut v = Self::V_INIT + dv;
        for _ in 1..num_v.saturating_sub(1) {
            let mut u = 0.0;
            for _ in 0..num_u - 1 {
                emit(u, v);
                u += du;
            }
            v += dv;
        }

        // The lone point at the opposite pole.
        emit(0.0, -Self::V_INIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_sphere_points_on_unit_radius() {
        let sphere = Sellipsoid::default();
        let mut mesh = Mesh::new();
        sphere.mesh_points(&mut mesh, 19, 9);

        assert_eq!(mesh.points().len(), 2 + 7 * 18);
        for p in mesh.points() {
            assert_relative_eq!(p.magnitude(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_pole_points() {
        let shape = Sellipsoid::new(1.0, 1.0, 2.0, 3.0, 4.0);
        let mut mesh = Mesh::new();
        shape.mesh_points(&mut mesh, 9, 5);

        let first = mesh.points()[0];
        let last = *mesh.points().last().unwrap();
        assert_relative_eq!(first.z, 4.0, epsilon = 1e-12);
        assert_relative_eq!(last.z, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_sphere_normals_parallel_to_position() {
        let sphere = Sellipsoid::default();
        let mut mesh = Mesh::new();
        sphere.mesh_points(&mut mesh, 13, 7);
        sphere.mesh_normals(&mut mesh);

        assert_eq!(mesh.normals().len(), mesh.points().len());
        for (p, n) in mesh.points().iter().zip(mesh.normals().iter()) {
            let cross = p.cross(*n);
            assert_relative_eq!(cross.magnitude(), 0.0, epsilon = 1e-9);
            assert!(p.dot(*n) > 0.0);
        }
    }

    #[test]
    fn test_closed_triangulation_winding_is_outward() {
        let sphere = Sellipsoid::default();
        let mut mesh = Mesh::new();
        sphere.mesh_points(&mut mesh, 17, 9);
        sphere.mesh_normals(&mut mesh);
        mesh.triangulate_closed();

        // Fans at the poles and wrapped quads alike must face outward.
        for &face in mesh.faces() {
            let cross = mesh.face_cross(face);
            let normal = mesh.normals()[face.a];
            assert!(
                cross.dot(normal) > 0.0,
                "face {face:?} wound against the outward normal"
            );
        }
    }

    #[test]
    fn test_squashed_ellipsoid_axes() {
        let shape = Sellipsoid::new(1.0, 1.0, 2.0, 1.0, 0.5);
        // u = 0, v = 0 sits on the +x axis.
        let p = shape.point_at(0.0, 0.0);
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_boxy_exponent_stays_signed() {
        // Small exponents square the cross-section off; the signed-power
        // helpers must keep each octant's signs intact.
        let boxy = Sellipsoid::new(0.2, 0.2, 1.0, 1.0, 1.0);
        let p = boxy.point_at(3.0 * FRAC_PI_2 / 3.0, -0.4);
        assert!(p.x < 0.0 || p.y > 0.0);
        let q = boxy.point_at(PI + 0.3, 0.0);
        assert!(q.x < 0.0 && q.y < 0.0);
    }
}
