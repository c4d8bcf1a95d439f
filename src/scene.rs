//! OpenInventor ASCII scene output.
//!
//! Everything here is formatting over the in-memory types: control points
//! become spheres, curve samples become indexed line sets, meshes become
//! indexed face sets with optional per-vertex normals. External viewers
//! consume the result; no numeric logic lives here.

use std::io::{self, Write};

use crate::math::matrix::Matrix;
use crate::math::point3::Point3;
use crate::mesh::Mesh;
use crate::polyline::Polyline;

/// Writes the `#Inventor V2.0 ascii` file header.
pub fn write_header<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "#Inventor V2.0 ascii")
}

/// Writes a point as a white Phong-lit sphere of the given radius.
pub fn write_point_sphere<W: Write + ?Sized>(w: &mut W, point: Point3, radius: f64) -> io::Result<()> {
    writeln!(w, "Separator {{")?;
    writeln!(w, "\tLightModel {{")?;
    writeln!(w, "\t\tmodel PHONG")?;
    writeln!(w, "\t}}")?;
    writeln!(w, "\tMaterial {{")?;
    writeln!(w, "\t\tdiffuseColor 1.0 1.0 1.0")?;
    writeln!(w, "\t}}")?;
    writeln!(w, "\tTransform {{")?;
    writeln!(w, "\t\ttranslation {:.6} {:.6} {:.6}", point.x, point.y, point.z)?;
    writeln!(w, "\t}}")?;
    writeln!(w, "\tSphere {{")?;
    writeln!(w, "\t\tradius {radius:.6}")?;
    writeln!(w, "\t}}")?;
    writeln!(w, "}}")
}

/// Writes one sphere per point; used for control-point markers.
pub fn write_point_spheres<W: Write>(w: &mut W, points: &[Point3], radius: f64) -> io::Result<()> {
    for &point in points {
        write_point_sphere(w, point, radius)?;
    }
    Ok(())
}

/// Writes a homogeneous 4x1 column vector as a point sphere.
pub fn write_matrix_point<W: Write + ?Sized>(w: &mut W, m: &Matrix, radius: f64) -> io::Result<()> {
    write_point_sphere(w, Point3::from_homogeneous(m), radius)
}

/// Writes a polyline as a flat-colored indexed line set through every
/// sample in order.
pub fn write_polyline<W: Write>(w: &mut W, poly: &Polyline) -> io::Result<()> {
    writeln!(w, "Separator {{")?;
    writeln!(w, "\tLightModel {{")?;
    writeln!(w, "\t\tmodel BASE_COLOR")?;
    writeln!(w, "\t}}")?;
    writeln!(w, "\tMaterial {{")?;
    writeln!(w, "\t\tdiffuseColor 1.0 0.2 0.2")?;
    writeln!(w, "\t}}")?;
    writeln!(w, "\tCoordinate3 {{")?;
    writeln!(w, "\t\tpoint [")?;
    for point in poly.points() {
        writeln!(w, "\t\t\t{:.6} {:.6} {:.6},", point.x, point.y, point.z)?;
    }
    writeln!(w, "\t\t]")?;
    writeln!(w, "\t}}")?;
    writeln!(w, "\tIndexedLineSet {{")?;
    writeln!(w, "\t\tcoordIndex [")?;
    for i in 0..poly.len() {
        writeln!(w, "\t\t\t{i},")?;
    }
    writeln!(w, "\t\t\t-1,")?;
    writeln!(w, "\t\t]")?;
    writeln!(w, "\t}}")?;
    writeln!(w, "}}")
}

/// Writes a mesh as an indexed face set. When the mesh carries normals,
/// they are emitted per-vertex ahead of the face set; otherwise the viewer
/// flat-shades from the face geometry.
pub fn write_mesh<W: Write>(w: &mut W, mesh: &Mesh) -> io::Result<()> {
    writeln!(w, "Separator {{")?;
    writeln!(w, "\tCoordinate3 {{")?;
    writeln!(w, "\t\tpoint [")?;
    for point in mesh.points() {
        writeln!(w, "\t\t\t{:.6} {:.6} {:.6},", point.x, point.y, point.z)?;
    }
    writeln!(w, "\t\t]")?;
    writeln!(w, "\t}}")?;

    if !mesh.normals().is_empty() {
        writeln!(w, "\tNormalBinding {{")?;
        writeln!(w, "\t\tvalue PER_VERTEX_INDEXED")?;
        writeln!(w, "\t}}")?;
        writeln!(w, "\tNormal {{")?;
        writeln!(w, "\t\tvector [")?;
        for normal in mesh.normals() {
            writeln!(w, "\t\t\t{:.6} {:.6} {:.6},", normal.x, normal.y, normal.z)?;
        }
        writeln!(w, "\t\t]")?;
        writeln!(w, "\t}}")?;
    }

    writeln!(w, "\tIndexedFaceSet {{")?;
    writeln!(w, "\t\tcoordIndex [")?;
    for face in mesh.faces() {
        writeln!(w, "\t\t\t{}, {}, {}, -1,", face.a, face.b, face.c)?;
    }
    writeln!(w, "\t\t]")?;
    writeln!(w, "\t}}")?;
    writeln!(w, "}}")
}

/// Writes eight cuboid corners as a closed wireframe line set, tracing
/// each face's two triangles.
pub fn write_cuboid_wireframe<W: Write + ?Sized>(w: &mut W, corners: &[Point3; 8]) -> io::Result<()> {
    writeln!(w, "Separator {{")?;
    writeln!(w, "\tCoordinate3 {{")?;
    writeln!(w, "\t\tpoint [")?;
    for corner in corners {
        writeln!(w, "\t\t\t{:.6} {:.6} {:.6},", corner.x, corner.y, corner.z)?;
    }
    writeln!(w, "\t\t]")?;
    writeln!(w, "\t}}")?;
    writeln!(w, "\tIndexedLineSet {{")?;
    writeln!(w, "\t\tcoordIndex [")?;
    const LOOPS: [[usize; 4]; 12] = [
        [0, 1, 2, 0],
        [0, 2, 3, 0],
        [7, 6, 5, 7],
        [7, 5, 4, 7],
        [0, 3, 7, 0],
        [0, 7, 4, 0],
        [1, 5, 6, 1],
        [1, 6, 2, 1],
        [0, 4, 5, 0],
        [0, 5, 1, 0],
        [3, 2, 6, 3],
        [3, 6, 7, 3],
    ];
    for [a, b, c, d] in LOOPS {
        writeln!(w, "\t\t\t{a}, {b}, {c}, {d}, -1,")?;
    }
    writeln!(w, "\t\t]")?;
    writeln!(w, "\t}}")?;
    writeln!(w, "}}")
}
