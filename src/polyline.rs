use crate::math::point3::Point3;

/// An ordered sequence of sampled points along a curve.
///
/// Curve evaluators append into a caller-owned polyline, so a spline built
/// from several segments accumulates all of them in order. Consecutive
/// segments each emit their own endpoints, so junction points appear twice;
/// the serializer draws through duplicates without issue and deduplicating
/// would change segment boundaries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point3>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point3) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
