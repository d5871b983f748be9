//! scene_core: minimal scene-graph scaffolding for the exhibit client.
//!
//! Owns the node arena (names, transforms, visibility, tagged mesh bounds),
//! the perspective camera, and pointer picking. Rendering consumes this
//! data; nothing here touches the GPU.

use glam::{Mat4, Quat, Vec3};

pub mod camera;
pub mod geom;
pub mod pick;

pub use camera::{Camera, OrbitControls};
pub use geom::Aabb;

/// Stable handle into a [`SceneGraph`]. Only `push` mints these, so an id is
/// valid for the lifetime of the graph it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Node payload. Mesh nodes carry local-space bounds used for picking;
/// groups are pure transform carriers.
#[derive(Copy, Clone, Debug)]
pub enum NodeKind {
    Group,
    Mesh { local_bounds: Aabb },
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub visible: bool,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
}

impl SceneNode {
    /// A visible mesh node at the given transform.
    #[must_use]
    pub fn mesh(name: impl Into<String>, transform: Transform, local_bounds: Aabb) -> Self {
        Self {
            name: name.into(),
            transform,
            visible: true,
            kind: NodeKind::Mesh { local_bounds },
            parent: None,
        }
    }

    #[must_use]
    pub fn group(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            visible: true,
            kind: NodeKind::Group,
            parent: None,
        }
    }
}

/// Flat node arena. Parent links point at earlier entries, so world-space
/// queries terminate.
#[derive(Default, Clone, Debug)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.index()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node with the given name, if any.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.name == name)
            .map(|i| NodeId(i as u32))
    }

    /// Ids of all mesh-kind nodes, in arena order.
    pub fn mesh_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| matches!(n.kind, NodeKind::Mesh { .. }))
            .map(|(i, _)| NodeId(i as u32))
    }

    #[must_use]
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = self.node(id);
        let local = node.transform.matrix();
        match node.parent {
            Some(p) => self.world_matrix(p) * local,
            None => local,
        }
    }

    /// World-space bounds for a mesh node; `None` for groups.
    #[must_use]
    pub fn world_bounds(&self, id: NodeId) -> Option<Aabb> {
        match self.node(id).kind {
            NodeKind::Mesh { local_bounds } => {
                Some(local_bounds.transformed(&self.world_matrix(id)))
            }
            NodeKind::Group => None,
        }
    }
}
