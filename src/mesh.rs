//! Indexed triangle meshes built from parameter grids.
//!
//! Surface evaluators fill a [`Mesh`] with sampled points (and optional
//! per-point normals) in a known grid order; the triangulators here turn
//! that grid into faces. Two layouts exist: the plain rectangular grid from
//! the bicubic patch, and the pole-bearing closed grid from the
//! superquadric, where the longitude dimension wraps around and each pole
//! collapses to a single point.

use crate::math::point3::Point3;

/// A triangle described by three indices into a mesh's point list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }
}

/// A grid-sampled surface: points, optional per-point normals, faces, and
/// the `num_u`/`num_v` resolution the points were generated at.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    points: Vec<Point3>,
    normals: Vec<Point3>,
    faces: Vec<Face>,
    num_u: usize,
    num_v: usize,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Per-point normals: empty for a flat-shaded mesh, otherwise parallel
    /// to [`Mesh::points`].
    pub fn normals(&self) -> &[Point3] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn num_u(&self) -> usize {
        self.num_u
    }

    pub fn num_v(&self) -> usize {
        self.num_v
    }

    pub fn push_point(&mut self, point: Point3) {
        self.points.push(point);
    }

    pub fn push_normal(&mut self, normal: Point3) {
        self.normals.push(normal);
    }

    pub(crate) fn set_resolution(&mut self, num_u: usize, num_v: usize) {
        self.num_u = num_u;
        self.num_v = num_v;
    }

    /// Triangulates a plain rectangular grid of `num_u` rows by `num_v`
    /// columns, two triangles per quad cell.
    ///
    /// The quad with corners `(i,j)`, `(i,j+1)`, `(i+1,j)`, `(i+1,j+1)` is
    /// split along the diagonal from `(i+1,j)` to `(i,j+1)`, wound so the
    /// face cross product agrees with the `du x dv` analytic normal of the
    /// generating surface.
    pub fn triangulate_grid(&mut self) {
        let (num_u, num_v) = (self.num_u, self.num_v);
        for i in 0..num_u.saturating_sub(1) {
            for j in 0..num_v.saturating_sub(1) {
                let curr = i * num_v + j;
                let next = (i + 1) * num_v + j;
                self.faces.push(Face::new(next, next + 1, curr + 1));
                self.faces.push(Face::new(next, curr + 1, curr));
            }
        }
    }

    /// Triangulates the pole-bearing closed layout produced by the
    /// superquadric evaluator: point 0 is one pole, then `num_v - 2`
    /// latitude rings of `num_u - 1` points each, then the opposite pole.
    ///
    /// Triangle fans join each pole to its adjacent ring; the rings between
    /// them use the rectangular scheme with the column index wrapped modulo
    /// the ring length, since the `u = 2*pi` column was never stored.
    pub fn triangulate_closed(&mut self) {
        let ring_len = self.num_u - 1;
        let rings = self.num_v.saturating_sub(2);
        if rings == 0 {
            return;
        }

        let ring_base = |r: usize| 1 + r * ring_len;
        let last_pole = 1 + rings * ring_len;

        // Fan from the first pole to the first ring.
        for i in 0..ring_len {
            let next = (i + 1) % ring_len;
            self.faces
                .push(Face::new(ring_base(0) + i, ring_base(0) + next, 0));
        }

        // Quad strips between consecutive rings.
        for r in 0..rings - 1 {
            let curr = ring_base(r);
            let below = ring_base(r + 1);
            for i in 0..ring_len {
                let next = (i + 1) % ring_len;
                self.faces
                    .push(Face::new(below + i, below + next, curr + next));
                self.faces.push(Face::new(below + i, curr + next, curr + i));
            }
        }

        // Fan from the last ring to the last pole.
        let last = ring_base(rings - 1);
        for i in 0..ring_len {
            let next = (i + 1) % ring_len;
            self.faces.push(Face::new(last + next, last + i, last_pole));
        }
    }

    /// Geometric cross product `(b - a) x (c - a)` of a face; the tests use
    /// it to check winding against analytic normals.
    pub fn face_cross(&self, face: Face) -> Point3 {
        let a = self.points[face.a];
        let b = self.points[face.b];
        let c = self.points[face.c];
        (b - a).cross(c - a)
    }
}
