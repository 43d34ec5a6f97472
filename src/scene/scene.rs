use slotmap::SlotMap;

use crate::animation::Animator;
use crate::scene::node::Node;
use crate::scene::{AnimatorKey, NodeKey};

/// Scene graph container.
///
/// Pure data layer: node storage, hierarchy bookkeeping and the registry of
/// animators driven by [`AnimationSystem`](crate::animation::AnimationSystem).
pub struct Scene {
    pub nodes: SlotMap<NodeKey, Node>,
    pub root_nodes: Vec<NodeKey>,

    /// Animators registered with the per-frame update loop.
    pub animators: SlotMap<AnimatorKey, Animator>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            animators: SlotMap::with_key(),
        }
    }

    /// Adds a node to the scene as a root node.
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.root_nodes.push(key);
        key
    }

    /// Adds a node as a child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeKey) -> NodeKey {
        let key = self.nodes.insert(child);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(key);
        }
        if let Some(c) = self.nodes.get_mut(key) {
            c.parent = Some(parent);
        }
        key
    }

    /// Re-parents an existing node, keeping both sides of the relationship
    /// in sync.
    pub fn attach(&mut self, child: NodeKey, parent: NodeKey) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }

        // Unhook from the previous parent or the root list
        if let Some(old_parent) = self.nodes.get(child).and_then(Node::parent) {
            if let Some(p) = self.nodes.get_mut(old_parent) {
                p.children.retain(|&c| c != child);
            }
        } else {
            self.root_nodes.retain(|&n| n != child);
        }

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    #[inline]
    pub fn get_node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Resolves a `/`-separated path of node names relative to `root`.
    ///
    /// The empty path resolves to `root` itself. Returns `None` if `root` is
    /// stale or any segment has no matching child.
    #[must_use]
    pub fn find_by_path(&self, root: NodeKey, path: &str) -> Option<NodeKey> {
        self.nodes.get(root)?;
        let mut current = root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let node = self.nodes.get(current)?;
            current = node
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes.get(child).is_some_and(|n| n.name == segment))?;
        }
        Some(current)
    }

    /// Registers an animator with the scene's per-frame update loop.
    pub fn add_animator(&mut self, animator: Animator) -> AnimatorKey {
        self.animators.insert(animator)
    }

    /// Unregisters an animator, returning it to the caller.
    pub fn remove_animator(&mut self, key: AnimatorKey) -> Option<Animator> {
        self.animators.remove(key)
    }

    #[inline]
    #[must_use]
    pub fn get_animator(&self, key: AnimatorKey) -> Option<&Animator> {
        self.animators.get(key)
    }

    #[inline]
    pub fn get_animator_mut(&mut self, key: AnimatorKey) -> Option<&mut Animator> {
        self.animators.get_mut(key)
    }

    /// Runs `f` against a registered animator with mutable access to the
    /// rest of the scene. Uses the `std::mem::take` technique to avoid
    /// borrow conflicts between the animator and the nodes it writes.
    pub fn with_animator<R>(
        &mut self,
        key: AnimatorKey,
        f: impl FnOnce(&mut Animator, &mut Scene) -> R,
    ) -> Option<R> {
        let mut animators = std::mem::take(&mut self.animators);
        let result = animators.get_mut(key).map(|animator| f(animator, self));
        self.animators = animators;
        result
    }
}
