//! Axonometric projection core: transform math, node hierarchy, scene.
//!
//! A [`Scene`] owns a forest of [`Node`]s. Each frame the caller mutates node
//! transforms, calls [`Scene::project_nodes`] and then [`Scene::sort_nodes`],
//! and draws the returned handles in order using `px`, `py` and `z_index`.

pub use glam::{DMat4, DQuat, DVec2, DVec3, dvec2, dvec3};

pub mod error;
pub mod flat;
pub mod math;
pub mod matrix;
pub mod node;
pub mod projection;
pub mod quaternion;
pub mod scene;

pub use error::{CoreError, CoreResult};
pub use flat::FlatProjection;
pub use node::{Node, NodeId, Parent};
pub use projection::Axonometric;
pub use scene::Scene;
