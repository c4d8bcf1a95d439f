//! Bicubic Bezier patch evaluation: tensor-product points over a UV grid
//! and analytic partial-derivative normals.

use crate::math::point3::Point3;
use crate::math::scalar::{bernstein_polynomial, cubic_bernstein_derivatives};
use crate::mesh::Mesh;

/// A bicubic Bezier patch defined by a 4x4 control net.
///
/// The net is stored flat and addressed as `ctrl[i + 4*j]` with `i` the
/// u-direction index and `j` the v-direction index.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierPatch {
    ctrl: [Point3; 16],
}

impl BezierPatch {
    pub fn new(ctrl: [Point3; 16]) -> Self {
        Self { ctrl }
    }

    /// Builds a patch from a slice of exactly 16 control points, in
    /// `i + 4*j` order. Returns `None` for any other length.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let ctrl: [Point3; 16] = points.try_into().ok()?;
        Some(Self { ctrl })
    }

    pub fn control_points(&self) -> &[Point3; 16] {
        &self.ctrl
    }

    /// Evaluates the patch at `(u, v)`.
    pub fn point_at(&self, u: f64, v: f64) -> Point3 {
        let mut point = Point3::ZERO;
        for j in 0..4 {
            let bernstein_m_j = bernstein_polynomial(3, j, v);
            for i in 0..4 {
                let bernstein_n_i = bernstein_polynomial(3, i, u);
                let scalar = bernstein_n_i * bernstein_m_j;
                point.fmad(self.ctrl[(i + 4 * j) as usize], scalar);
            }
        }
        point
    }

    /// Evaluates the analytic partial derivatives `(d/du, d/dv)` at
    /// `(u, v)`: the derivative Bernstein weights run along one axis of the
    /// control net while the other axis is summed against the ordinary
    /// basis.
    pub fn partials_at(&self, u: f64, v: f64) -> (Point3, Point3) {
        let du_weights = cubic_bernstein_derivatives(u);
        let dv_weights = cubic_bernstein_derivatives(v);

        let mut d_du = Point3::ZERO;
        let mut d_dv = Point3::ZERO;
        for j in 0..4 {
            let basis_v = bernstein_polynomial(3, j as u32, v);
            for i in 0..4 {
                let basis_u = bernstein_polynomial(3, i as u32, u);
                let ctrl = self.ctrl[i + 4 * j];
                d_du.fmad(ctrl, du_weights[i] * basis_v);
                d_dv.fmad(ctrl, basis_u * dv_weights[j]);
            }
        }
        (d_du, d_dv)
    }

    /// The surface normal `d/du x d/dv` at `(u, v)` (unnormalized). The
    /// cross-product order matches the winding used by
    /// [`Mesh::triangulate_grid`].
    pub fn normal_at(&self, u: f64, v: f64) -> Point3 {
        let (d_du, d_dv) = self.partials_at(u, v);
        d_du.cross(d_dv)
    }

    /// Samples a `num_u x num_v` grid of patch points into `mesh`, u-major,
    /// covering `[0, 1]` inclusively in both parameters, and records the
    /// resolution on the mesh.
    ///
    /// Rows and columns are counted with integers and the parameter is
    /// recomputed as `index / (count - 1)` each step; accumulating a float
    /// increment can drift enough to skip the final row. Callers guarantee
    /// `num_u >= 2` and `num_v >= 2`.
    pub fn mesh_points(&self, mesh: &mut Mesh, num_u: usize, num_v: usize) {
        for iu in 0..num_u {
            let u = iu as f64 / (num_u - 1) as f64;
            for iv in 0..num_v {
                let v = iv as f64 / (num_v - 1) as f64;
                mesh.push_point(self.point_at(u, v));
            }
        }

        mesh.set_resolution(num_u, num_v);
    }

    /// Computes one normal per existing mesh point, in the same grid order
    /// [`BezierPatch::mesh_points`] produced them.
    pub fn mesh_normals(&self, mesh: &mut Mesh) {
        let (num_u, num_v) = (mesh.num_u(), mesh.num_v());
        for iu in 0..num_u {
            let u = iu as f64 / (num_u - 1) as f64;
            for iv in 0..num_v {
                let v = iv as f64 / (num_v - 1) as f64;
                mesh.push_normal(self.normal_at(u, v));
            }
        }
    }
}
