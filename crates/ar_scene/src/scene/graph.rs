//! Scene graph storage and attachment operations

use crate::foundation::math::Vec3;
use crate::light::PointLight;
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

new_key_type! {
    /// Generational key identifying a node in a [`SceneGraph`]
    pub struct NodeKey;
}

/// Errors produced by scene graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A node key was stale or never belonged to this graph
    #[error("scene node not found: {0:?}")]
    NodeNotFound(NodeKey),

    /// Attach was attempted on a node that already has a parent
    #[error("scene node already attached to a parent: {0:?}")]
    AlreadyAttached(NodeKey),
}

/// Renderable shape carried by a node
///
/// Mesh generation and drawing are the renderer's concern; the graph only
/// records what the node represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Sphere primitive used for plane markers
    Sphere {
        /// Sphere radius in meters
        radius: f32,
    },
}

/// One node in the scene graph
#[derive(Debug, Clone)]
pub struct Node {
    /// Position relative to the parent node
    pub position: Vec3,

    /// Optional geometry tag for the renderer
    pub geometry: Option<Geometry>,

    /// Optional light source attached to this node
    pub light: Option<PointLight>,

    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
}

impl Node {
    /// Create an empty node at the given position
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            geometry: None,
            light: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a sphere marker node
    pub fn sphere(position: Vec3, radius: f32) -> Self {
        Self {
            geometry: Some(Geometry::Sphere { radius }),
            ..Self::new(position)
        }
    }

    /// Create a node carrying an omnidirectional light, initially dark
    pub fn point_light(position: Vec3) -> Self {
        Self {
            light: Some(PointLight::dark()),
            ..Self::new(position)
        }
    }

    /// Parent of this node, if attached
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Children attached under this node
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }
}

/// Retained scene graph backed by a slotmap
///
/// There is no removal path: AR content created during a session lives for
/// the whole session, matching the lifetime of the tracking anchors it hangs
/// off. Lookups through stale keys fail with [`SceneError::NodeNotFound`].
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, Node>,
}

impl SceneGraph {
    /// Create an empty scene graph
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Insert a node and return its key
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Attach `child` under `parent`
    ///
    /// Both keys must be live and the child must not already have a parent.
    pub fn attach(&mut self, parent: NodeKey, child: NodeKey) -> Result<(), SceneError> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::NodeNotFound(parent));
        }
        match self.nodes.get(child) {
            None => return Err(SceneError::NodeNotFound(child)),
            Some(node) if node.parent.is_some() => {
                return Err(SceneError::AlreadyAttached(child));
            }
            Some(_) => {}
        }

        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    /// Borrow a node
    pub fn node(&self, key: NodeKey) -> Result<&Node, SceneError> {
        self.nodes.get(key).ok_or(SceneError::NodeNotFound(key))
    }

    /// Mutably borrow a node
    pub fn node_mut(&mut self, key: NodeKey) -> Result<&mut Node, SceneError> {
        self.nodes.get_mut(key).ok_or(SceneError::NodeNotFound(key))
    }

    /// Borrow the light attached at `key`, if the key is live and carries one
    pub fn light(&self, key: NodeKey) -> Option<&PointLight> {
        self.nodes.get(key).and_then(|node| node.light.as_ref())
    }

    /// Mutably borrow the light attached at `key`
    ///
    /// Returns `None` for stale keys and for nodes without a light, so
    /// batch updates can skip rather than fail.
    pub fn light_mut(&mut self, key: NodeKey) -> Option<&mut PointLight> {
        self.nodes.get_mut(key).and_then(|node| node.light.as_mut())
    }

    /// Position of a node in world space (sum of the parent chain)
    pub fn world_position(&self, key: NodeKey) -> Result<Vec3, SceneError> {
        let mut position = Vec3::zeros();
        let mut current = Some(key);
        while let Some(k) = current {
            let node = self.node(k)?;
            position += node.position;
            current = node.parent();
        }
        Ok(position)
    }

    /// Total number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_builds_parent_child_links() {
        let mut graph = SceneGraph::new();
        let anchor = graph.add_node(Node::new(Vec3::zeros()));
        let marker = graph.add_node(Node::sphere(Vec3::new(0.0, 1.1, -0.5), 0.1));

        graph.attach(anchor, marker).unwrap();

        assert_eq!(graph.node(marker).unwrap().parent(), Some(anchor));
        assert_eq!(graph.node(anchor).unwrap().children(), &[marker]);
    }

    #[test]
    fn test_attach_rejects_second_parent() {
        let mut graph = SceneGraph::new();
        let a = graph.add_node(Node::new(Vec3::zeros()));
        let b = graph.add_node(Node::new(Vec3::zeros()));
        let child = graph.add_node(Node::new(Vec3::zeros()));

        graph.attach(a, child).unwrap();
        assert_eq!(
            graph.attach(b, child),
            Err(SceneError::AlreadyAttached(child))
        );
    }

    #[test]
    fn test_world_position_sums_parent_chain() {
        let mut graph = SceneGraph::new();
        let anchor = graph.add_node(Node::new(Vec3::new(0.0, 0.0, -2.0)));
        let marker = graph.add_node(Node::sphere(Vec3::new(0.0, 1.1, 0.0), 0.1));
        let light = graph.add_node(Node::point_light(Vec3::new(-1.0, 0.0, 0.0)));

        graph.attach(anchor, marker).unwrap();
        graph.attach(marker, light).unwrap();

        let position = graph.world_position(light).unwrap();
        assert_eq!(position, Vec3::new(-1.0, 1.1, -2.0));
    }

    #[test]
    fn test_light_lookup_skips_nodes_without_light() {
        let mut graph = SceneGraph::new();
        let marker = graph.add_node(Node::sphere(Vec3::zeros(), 0.1));
        let light = graph.add_node(Node::point_light(Vec3::zeros()));

        assert!(graph.light(marker).is_none());
        assert!(graph.light(light).is_some());
    }

    #[test]
    fn test_stale_key_is_an_error() {
        let mut other = SceneGraph::new();
        let foreign = other.add_node(Node::new(Vec3::zeros()));

        let graph = SceneGraph::new();
        assert!(matches!(
            graph.node(foreign),
            Err(SceneError::NodeNotFound(key)) if key == foreign
        ));
    }
}
