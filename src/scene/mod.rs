//! Scene graph module
//!
//! The minimal host-side structure the animator writes into:
//! - Node: scene node (parent/child hierarchy plus a transform)
//! - Transform: position / rotation / scale with matrix caching
//! - Scene: node storage and animator registry

pub mod node;
pub mod scene;
pub mod transform;

pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Generational key identifying a [`Node`] inside a [`Scene`].
    pub struct NodeKey;
    /// Generational key identifying an animator stored on a [`Scene`].
    pub struct AnimatorKey;
}
