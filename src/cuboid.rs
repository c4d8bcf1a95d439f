//! Axis-aligned cuboid whose corners live as homogeneous column vectors,
//! so a 4x4 transform can be baked straight into them.

use crate::math::matrix::Matrix;
use crate::math::point3::Point3;

/// Corner ordering shared with the wireframe serializer: upper-right-front
/// first, then around the top face, then the bottom face.
fn corner_points(lowleft: Point3, upright: Point3) -> [Point3; 8] {
    let (llx, lly, llz) = (lowleft.x, lowleft.y, lowleft.z);
    let (urx, ury, urz) = (upright.x, upright.y, upright.z);
    [
        Point3::new(urx, ury, urz),
        Point3::new(llx, ury, urz),
        Point3::new(llx, lly, urz),
        Point3::new(urx, lly, urz),
        Point3::new(urx, ury, llz),
        Point3::new(llx, ury, llz),
        Point3::new(llx, lly, llz),
        Point3::new(urx, lly, llz),
    ]
}

/// An axis-aligned box defined by its lower-left and upper-right corners,
/// stored as eight homogeneous 4x1 matrices.
#[derive(Clone, Debug, PartialEq)]
pub struct Cuboid {
    corners: [Matrix; 8],
}

impl Cuboid {
    pub fn new(lowleft: Point3, upright: Point3) -> Self {
        let corners = corner_points(lowleft, upright).map(Point3::to_homogeneous);
        Self { corners }
    }

    /// Multiplies `transform` into every corner in place. Repeated calls
    /// accumulate, which is exactly what the hierarchy's draw pass wants:
    /// each node bakes its accumulated frame into the geometry it emits.
    pub fn apply_transform(&mut self, transform: &Matrix) {
        let mut tmp = Matrix::new(4, 1);
        for corner in &mut self.corners {
            tmp.zero();
            tmp.multiply(transform, corner);
            corner.assign(&tmp);
        }
    }

    /// The corners as plain points, in serializer order.
    pub fn corners(&self) -> [Point3; 8] {
        let mut out = [Point3::ZERO; 8];
        for (point, corner) in out.iter_mut().zip(self.corners.iter()) {
            *point = Point3::from_homogeneous(corner);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms;

    #[test]
    fn test_corner_ordering() {
        let cuboid = Cuboid::new(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 2.0));
        let corners = cuboid.corners();
        assert_eq!(corners[0], Point3::new(1.0, 1.0, 2.0));
        assert_eq!(corners[6], Point3::new(-1.0, -1.0, 0.0));
    }

    #[test]
    fn test_translation_moves_all_corners() {
        let mut cuboid = Cuboid::new(Point3::ZERO, Point3::new(1.0, 1.0, 1.0));
        let before = cuboid.corners();
        cuboid.apply_transform(&transforms::translation(5.0, 0.0, -2.0));
        for (after, before) in cuboid.corners().iter().zip(before.iter()) {
            assert_eq!(*after, *before + Point3::new(5.0, 0.0, -2.0));
        }
    }

    #[test]
    fn test_transforms_accumulate() {
        let mut cuboid = Cuboid::new(Point3::ZERO, Point3::new(1.0, 1.0, 1.0));
        cuboid.apply_transform(&transforms::translation(1.0, 0.0, 0.0));
        cuboid.apply_transform(&transforms::translation(0.0, 1.0, 0.0));
        assert_eq!(cuboid.corners()[6], Point3::new(1.0, 1.0, 0.0));
    }
}
