//! Retained-mode scene graph
//!
//! Nodes live in a slot map and keep their identity for the lifetime of the
//! scene; applications mutate them in place between frames.

use slotmap::{new_key_type, SlotMap};

use super::node::{Light, NodeKind, SceneNode};
use crate::foundation::math::Vec3;

new_key_type! {
    /// Stable handle to a node in a [`Scene`]
    pub struct NodeId;
}

/// Flat scene graph (no parenting; every transform is world space)
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, SceneNode>,
    background: u32,
}

impl Scene {
    /// Create an empty scene with a black background
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clear color as `0xRRGGBB`
    pub fn set_background(&mut self, hex: u32) {
        self.background = hex;
    }

    /// Clear color as `0xRRGGBB`
    pub fn background(&self) -> u32 {
        self.background
    }

    /// Add a node and return its handle
    pub fn add(&mut self, node: SceneNode) -> NodeId {
        log::trace!("Scene add '{}'", node.name);
        self.nodes.insert(node)
    }

    /// Remove a node
    pub fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        self.nodes.remove(id)
    }

    /// Look up a node
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// Look up a node mutably
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    /// First node with the given name
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|(_, node)| node.name == name).map(|(id, _)| id)
    }

    /// Move a node; returns false for a stale handle
    pub fn set_position(&mut self, id: NodeId, position: Vec3) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.transform.position = position;
                true
            }
            None => false,
        }
    }

    /// Add to a node's Euler rotation; returns false for a stale handle
    pub fn rotate_euler(&mut self, id: NodeId, delta: Vec3) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.transform.rotation += delta;
                true
            }
            None => false,
        }
    }

    /// Visible mesh nodes
    pub fn meshes(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.visible && matches!(node.kind, NodeKind::Mesh { .. }))
    }

    /// Visible lights
    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.nodes.values().filter(|node| node.visible).filter_map(|node| match &node.kind {
            NodeKind::Light(light) => Some(light),
            NodeKind::Mesh { .. } => None,
        })
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Geometry, Material};

    fn ball(name: &str) -> SceneNode {
        SceneNode::mesh(name, Geometry::sphere(1.0, 8, 8), Material::basic(0xffffff))
    }

    #[test]
    fn test_add_remove_and_stale_handles() {
        let mut scene = Scene::new();
        let a = scene.add(ball("a"));
        let b = scene.add(ball("b"));
        assert_eq!(scene.len(), 2);

        assert!(scene.remove(a).is_some());
        assert_eq!(scene.len(), 1);
        assert!(scene.get(a).is_none());
        assert!(!scene.set_position(a, Vec3::new(1.0, 0.0, 0.0)));
        assert!(scene.get(b).is_some());
    }

    #[test]
    fn test_find_and_mutate() {
        let mut scene = Scene::new();
        scene.add(ball("planet"));
        let id = scene.find_by_name("planet").unwrap();

        scene.set_position(id, Vec3::new(0.0, 0.0, -50.0));
        scene.rotate_euler(id, Vec3::new(0.01, 0.01, 0.0));
        scene.rotate_euler(id, Vec3::new(0.01, 0.01, 0.0));

        let node = scene.get(id).unwrap();
        assert_eq!(node.transform.position.z, -50.0);
        assert!((node.transform.rotation.x - 0.02).abs() < 1e-6);
        assert!(scene.find_by_name("moon").is_none());
    }

    #[test]
    fn test_meshes_and_lights_skip_hidden() {
        let mut scene = Scene::new();
        scene.add(ball("visible"));
        let hidden = scene.add(ball("hidden"));
        scene.add(SceneNode::light("ambient", Light::ambient(0x404040, 1.0)));
        scene.get_mut(hidden).unwrap().visible = false;

        assert_eq!(scene.meshes().count(), 1);
        assert_eq!(scene.lights().count(), 1);
    }
}
