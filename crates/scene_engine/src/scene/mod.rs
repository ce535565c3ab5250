//! Scene management
//!
//! A scene is a set of retained nodes (meshes and lights) that applications
//! build once and then mutate in place; renderers read it every frame.

mod node;
mod scene_graph;

pub use node::{Color, Geometry, Light, Material, NodeKind, SceneNode};
pub use scene_graph::{NodeId, Scene};
