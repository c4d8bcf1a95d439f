//! Bezier curve evaluation through the Bernstein basis.
//!
//! A curve over `n` control points has degree `n - 1`; the degree is
//! derived, never stored. Sampling walks the parameter by a caller-chosen
//! increment and pins both endpoints to the exact control points, so
//! floating-point drift in the accumulated parameter can never lose the
//! curve ends.

use crate::math::point3::Point3;
use crate::math::scalar::bernstein_polynomial;
use crate::polyline::Polyline;

/// A Bezier curve of arbitrary degree, defined by its control points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BezierCurve {
    ctrl: Vec<Point3>,
}

impl BezierCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a curve from an ordered list of control points.
    ///
    /// Callers guarantee at least two points before sampling.
    pub fn from_control_points(ctrl: Vec<Point3>) -> Self {
        Self { ctrl }
    }

    /// Converts a cubic Hermite segment (endpoints `p0`, `p3` with tangent
    /// vectors `t0`, `t1`) into the equivalent four Bezier control points
    /// `[p0, p0 + t0/3, p3 - t1/3, p3]`.
    ///
    /// Tangent magnitude matters, not just direction: it sets the distance
    /// to the interior control points, so tangents are not normalized.
    pub fn from_hermite(p0: Point3, p3: Point3, t0: Point3, t1: Point3) -> Self {
        let p1 = p0 + t0 * (1.0 / 3.0);
        let p2 = p3 + t1 * (-1.0 / 3.0);
        Self {
            ctrl: vec![p0, p1, p2, p3],
        }
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.ctrl
    }

    pub fn push_control_point(&mut self, point: Point3) {
        self.ctrl.push(point);
    }

    /// Evaluates the curve at parameter `u` by summing every control point
    /// against its Bernstein weight.
    pub fn point_at(&self, u: f64) -> Point3 {
        let k = (self.ctrl.len() - 1) as u32;
        let mut point = Point3::ZERO;
        for (i, &ctrl) in self.ctrl.iter().enumerate() {
            let scalar = bernstein_polynomial(k, i as u32, u);
            point.fmad(ctrl, scalar);
        }
        point
    }

    /// Samples the curve at `u = 0, inc, 2*inc, ...` below 1.0 and appends
    /// the samples to `poly`, finishing with an explicit sample at exactly
    /// `u = 1.0`.
    ///
    /// The first sample is the first control point itself and the last is
    /// the last control point: mathematically what the Bernstein sum gives
    /// at 0 and 1, but exact. `inc` must be in `(0, 1]`; the CLI layer
    /// validates that before calling in.
    pub fn append_polyline(&self, poly: &mut Polyline, inc: f64) {
        // The first point is just the first control point.
        poly.push(self.ctrl[0]);

        let mut u = inc;
        while u < 1.0 {
            poly.push(self.point_at(u));
            u += inc;
        }

        // Make sure to handle u == 1.0 - just the last control point.
        poly.push(self.ctrl[self.ctrl.len() - 1]);
    }

    /// Convenience wrapper over [`BezierCurve::append_polyline`] producing
    /// a fresh polyline.
    pub fn polyline(&self, inc: f64) -> Polyline {
        let mut poly = Polyline::new();
        self.append_polyline(&mut poly, inc);
        poly
    }
}
