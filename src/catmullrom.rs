//! Catmull-Rom spline built from chained Hermite-derived Bezier segments.
//!
//! Interior tangents come from central differences over the neighboring
//! control points; the two boundary tangents are supplied by the caller,
//! which keeps the ends C1-continuous with whatever the input data wants.

use crate::bezier::BezierCurve;
use crate::math::point3::Point3;
use crate::polyline::Polyline;

/// A Catmull-Rom spline through an ordered sequence of control points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatmullRom {
    ctrl: Vec<Point3>,
    t0: Point3,
    t_n: Point3,
}

impl CatmullRom {
    /// Creates a spline over `ctrl` with boundary tangents `t0` (at the
    /// first point) and `t_n` (at the last point).
    ///
    /// Callers guarantee at least two control points.
    pub fn new(ctrl: Vec<Point3>, t0: Point3, t_n: Point3) -> Self {
        Self { ctrl, t0, t_n }
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.ctrl
    }

    /// Samples the whole spline into `poly` at parameter increment `inc`
    /// per segment.
    ///
    /// Each interior junction `k` synthesizes the tangent at `ctrl[k+1]` as
    /// `0.5 * (ctrl[k+2] - ctrl[k])`, builds the Hermite-derived Bezier
    /// segment from `ctrl[k]` to `ctrl[k+1]`, and appends its full
    /// polyline. Every segment emits both of its endpoints, so junction
    /// points are duplicated in the output; see [`Polyline`]. With exactly
    /// two control points the interior loop is skipped and the single
    /// segment uses both boundary tangents directly.
    pub fn append_polyline(&self, poly: &mut Polyline, inc: f64) {
        let num_ctrl = self.ctrl.len();
        let mut t0 = self.t0;

        for k in 0..num_ctrl.saturating_sub(2) {
            // t1 = 0.5 * (p[k+2] - p[k])
            let t1 = (self.ctrl[k + 2] - self.ctrl[k]) * 0.5;

            let segment = BezierCurve::from_hermite(self.ctrl[k], self.ctrl[k + 1], t0, t1);
            segment.append_polyline(poly, inc);

            t0 = t1;
        }

        let segment = BezierCurve::from_hermite(
            self.ctrl[num_ctrl - 2],
            self.ctrl[num_ctrl - 1],
            t0,
            self.t_n,
        );
        segment.append_polyline(poly, inc);
    }

    /// Convenience wrapper producing a fresh polyline.
    pub fn polyline(&self, inc: f64) -> Polyline {
        let mut poly = Polyline::new();
        self.append_polyline(&mut poly, inc);
        poly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_points_single_segment() {
        // count == 2: only the final segment, using both boundary tangents.
        let spline = CatmullRom::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0)],
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        );
        let poly = spline.polyline(0.5);
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.points()[0], Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(poly.points()[1].x, 1.5, epsilon = 1e-12);
        assert_eq!(poly.points()[2], Point3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_passes_through_control_points() {
        let ctrl = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
            Point3::new(4.0, -1.0, 0.0),
        ];
        let spline = CatmullRom::new(
            ctrl.clone(),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
        );
        let poly = spline.polyline(0.25);
        let points = poly.points();

        // Each of the three segments starts and ends on a control point.
        for p in &ctrl {
            assert!(points.iter().any(|q| (*q - *p).magnitude() < 1e-12));
        }
    }

    #[test]
    fn test_junction_points_duplicated() {
        let spline = CatmullRom::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        );
        let poly = spline.polyline(0.5);
        // Two segments of 3 samples each; the junction at x=1 appears as
        // the last sample of segment one and the first of segment two.
        assert_eq!(poly.len(), 6);
        assert_eq!(poly.points()[2], poly.points()[3]);
    }

    #[test]
    fn test_interior_tangent_is_central_difference() {
        // Segment 0 of a 3-point spline is the Hermite segment with end
        // tangent 0.5 * (p2 - p0); its Bezier form pins the second-to-last
        // control point at p1 - t/3, which the sampled curve approaches
        // linearly near u = 1.
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(2.0, 1.0, 0.0);
        let p2 = Point3::new(4.0, 0.0, 0.0);
        let t0 = Point3::new(1.0, 0.0, 0.0);
        let t1 = (p2 - p0) * 0.5;

        let spline = CatmullRom::new(vec![p0, p1, p2], t0, Point3::new(1.0, 0.0, 0.0));
        let expected = BezierCurve::from_hermite(p0, p1, t0, t1);

        let mut spline_poly = Polyline::new();
        spline.append_polyline(&mut spline_poly, 0.25);
        let segment_poly = expected.polyline(0.25);

        for (a, b) in segment_poly
            .points()
            .iter()
            .zip(spline_poly.points().iter())
        {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
            assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
        }
    }
}
