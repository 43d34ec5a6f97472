use crate::scene::transform::Transform;
use crate::scene::NodeKey;

/// A minimal scene node: name, hierarchy and transform.
///
/// Animation curves address nodes by a `/`-separated path of names relative
/// to the animator's root node, so `name` is part of the node's identity as
/// far as this crate is concerned. Everything else (meshes, cameras, ...) is
/// the host engine's business.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,

    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,

    /// Transform component (hot data, written every frame by the animator)
    pub transform: Transform,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }
}
