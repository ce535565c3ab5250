//! Collision primitives
//!
//! Brute-force proximity tests; callers scan their object lists linearly.

mod primitives;

pub use primitives::{within_distance, BoundingSphere};
