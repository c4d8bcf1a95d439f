//! Hierarchical transform propagation over a first-child/next-sibling
//! scene tree.
//!
//! Each node carries a drawable payload and a `from_parent` transform.
//! Drawing walks the tree pre-order: a node composes its local frame from
//! the inherited one, draws its payload, recurses into its child with the
//! local frame, then into its sibling with the *original* inherited frame,
//! since siblings share a parent, not each other's accumulation. The first
//! failure anywhere propagates straight up without visiting further nodes.

use std::io::Write;

use crate::cuboid::Cuboid;
use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::scene;

/// A payload that can draw itself given an accumulated world transform.
///
/// Drawing takes `&mut self` because payloads bake the transform into
/// their stored geometry before serializing it.
pub trait Drawable {
    fn draw(&mut self, transform: &Matrix, out: &mut dyn Write) -> Result<()>;
}

/// A scene-tree node: payload, parent-relative transform, and optional
/// child/sibling links encoding a forest.
pub struct SceneNode {
    payload: Box<dyn Drawable>,
    from_parent: Matrix,
    sibling: Option<Box<SceneNode>>,
    child: Option<Box<SceneNode>>,
}

impl SceneNode {
    pub fn new(payload: Box<dyn Drawable>, from_parent: Matrix) -> Self {
        Self {
            payload,
            from_parent,
            sibling: None,
            child: None,
        }
    }

    /// Attaches `node` as the first child, returning a handle to it so
    /// chains can be built top-down.
    pub fn set_child(&mut self, node: SceneNode) -> &mut SceneNode {
        self.child.insert(Box::new(node))
    }

    /// Attaches `node` as the next sibling.
    pub fn set_sibling(&mut self, node: SceneNode) -> &mut SceneNode {
        self.sibling.insert(Box::new(node))
    }

    /// Draws this node and everything below/after it.
    ///
    /// `local = inherited * from_parent`; the payload draws with `local`,
    /// the child subtree inherits `local`, and the sibling subtree
    /// inherits the unchanged `inherited` frame.
    pub fn draw(&mut self, inherited: &Matrix, out: &mut dyn Write) -> Result<()> {
        let mut local = Matrix::new(4, 4);
        local.multiply(inherited, &self.from_parent);

        self.payload.draw(&local, out)?;

        if let Some(child) = &mut self.child {
            child.draw(&local, out)?;
        }

        if let Some(sibling) = &mut self.sibling {
            sibling.draw(inherited, out)?;
        }

        Ok(())
    }
}

/// A point payload: a homogeneous position drawn as a small sphere.
pub struct PointMarker {
    position: Matrix,
    radius: f64,
}

impl PointMarker {
    pub fn new(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self {
            position: Matrix::from_array(4, 1, &[x, y, z, 1.0]),
            radius,
        }
    }
}

impl Drawable for PointMarker {
    fn draw(&mut self, transform: &Matrix, out: &mut dyn Write) -> Result<()> {
        let mut tmp = Matrix::new(4, 1);
        tmp.multiply(transform, &self.position);
        self.position.assign(&tmp);
        scene::write_matrix_point(out, &self.position, self.radius)?;
        Ok(())
    }
}

/// A cuboid payload drawn as a wireframe after baking in the accumulated
/// transform.
pub struct CuboidFrame {
    cuboid: Cuboid,
}

impl CuboidFrame {
    pub fn new(cuboid: Cuboid) -> Self {
        Self { cuboid }
    }
}

impl Drawable for CuboidFrame {
    fn draw(&mut self, transform: &Matrix, out: &mut dyn Write) -> Result<()> {
        self.cuboid.apply_transform(transform);
        scene::write_cuboid_wireframe(out, &self.cuboid.corners())?;
        Ok(())
    }
}
