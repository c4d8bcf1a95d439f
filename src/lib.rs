//! Parametric curve and surface evaluation for 3D scene generation.
//!
//! This crate evaluates Bezier curves, Catmull-Rom splines, bicubic Bezier
//! patches, and superquadric ellipsoids from control points, triangulates
//! the sampled grids into indexed meshes, and serializes everything as
//! OpenInventor ASCII for external viewers. A small hierarchical
//! scene-graph walker composes homogeneous transforms down a
//! first-child/next-sibling tree.
//!
//! # Quick Start
//!
//! ```ignore
//! use curvegen::prelude::*;
//!
//! let curve = BezierCurve::from_control_points(points);
//! let poly = curve.polyline(0.05);
//! scene::write_polyline(&mut out, &poly)?;
//! ```

// Public API - exposed to library consumers
pub mod bezier;
pub mod catmullrom;
pub mod cuboid;
pub mod error;
pub mod hierarchy;
pub mod io;
pub mod math;
pub mod mesh;
pub mod polyline;
pub mod scene;
pub mod sellipsoid;
pub mod surface;
pub mod transforms;

// Re-export commonly needed types at crate root for convenience
pub use bezier::BezierCurve;
pub use catmullrom::CatmullRom;
pub use error::{Error, Result};
pub use mesh::{Face, Mesh};
pub use polyline::Polyline;
pub use sellipsoid::Sellipsoid;
pub use surface::BezierPatch;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use curvegen::prelude::*;
/// ```
pub mod prelude {
    // Curves and surfaces
    pub use crate::bezier::BezierCurve;
    pub use crate::catmullrom::CatmullRom;
    pub use crate::sellipsoid::Sellipsoid;
    pub use crate::surface::BezierPatch;

    // Geometry containers
    pub use crate::mesh::{Face, Mesh};
    pub use crate::polyline::Polyline;

    // Math
    pub use crate::math::matrix::Matrix;
    pub use crate::math::point3::Point3;

    // Scene graph
    pub use crate::cuboid::Cuboid;
    pub use crate::hierarchy::{CuboidFrame, Drawable, PointMarker, SceneNode};

    // Errors
    pub use crate::error::{Error, Result};
}
