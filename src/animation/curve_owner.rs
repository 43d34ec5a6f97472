use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::animation::values::AnimValue;
use crate::scene::{NodeKey, Scene};

new_key_type! {
    /// Key into an animator's [`OwnerRegistry`]. Owners are never removed,
    /// so keys stay valid for the animator's lifetime.
    pub struct OwnerKey;
}

/// The transform property a curve drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Position,
    Rotation,
    Scale,
}

impl PropertyKind {
    /// The value written when no snapshot is available (stale node handle).
    #[must_use]
    pub fn identity_value(self) -> AnimValue {
        match self {
            PropertyKind::Position => AnimValue::Vector3(Vec3::ZERO),
            PropertyKind::Rotation => AnimValue::Quaternion(Quat::IDENTITY),
            PropertyKind::Scale => AnimValue::Vector3(Vec3::ONE),
        }
    }
}

/// The cached binding between one animated property and the node it writes.
///
/// One owner exists per (node, property) pair, shared by every state that
/// touches that property. `default_value` is snapshotted once, when the
/// owner is created on the property's first activation; `fixed_pose_value`
/// is re-snapshotted whenever a transition has to freeze an in-flight pose.
#[derive(Debug, Clone)]
pub struct CurveOwner {
    pub node: NodeKey,
    pub property: PropertyKind,
    pub default_value: AnimValue,
    pub fixed_pose_value: AnimValue,

    /// Generation stamp: equals the layer's current cross-curve mark iff
    /// this owner is already in the transition's curve set.
    pub(crate) cross_curve_mark: u64,
    /// Slot in the layer's cross-curve buffer, valid under the mark above.
    pub(crate) cross_curve_index: usize,
}

impl CurveOwner {
    /// Reads the live value of the bound property, falling back to the
    /// default snapshot when the node is gone.
    #[must_use]
    pub fn current_value(&self, scene: &Scene) -> AnimValue {
        read_property(scene, self.node, self.property).unwrap_or(self.default_value)
    }

    pub(crate) fn save_fixed_pose(&mut self, scene: &Scene) {
        self.fixed_pose_value = self.current_value(scene);
    }

    /// Restores the property to the value it had before any state touched it.
    pub(crate) fn revert_default(&self, scene: &mut Scene) {
        self.write_target(scene, self.default_value);
    }

    /// Writes `value` onto the bound property and marks the transform dirty
    /// so the host's transform pass picks it up this frame. A value kind
    /// that cannot drive the property is a no-op.
    pub(crate) fn write_target(&self, scene: &mut Scene, value: AnimValue) {
        let Some(node) = scene.get_node_mut(self.node) else {
            return;
        };
        match (self.property, value) {
            (PropertyKind::Position, AnimValue::Vector3(v)) => node.transform.position = v,
            (PropertyKind::Scale, AnimValue::Vector3(v)) => node.transform.scale = v,
            (PropertyKind::Rotation, AnimValue::Quaternion(q)) => node.transform.rotation = q,
            (property, value) => {
                log::warn!("value kind {:?} cannot drive {property:?}", value.kind());
                return;
            }
        }
        node.transform.mark_dirty();
    }
}

fn read_property(scene: &Scene, node: NodeKey, property: PropertyKind) -> Option<AnimValue> {
    let node = scene.get_node(node)?;
    Some(match property {
        PropertyKind::Position => AnimValue::Vector3(node.transform.position),
        PropertyKind::Rotation => AnimValue::Quaternion(node.transform.rotation),
        PropertyKind::Scale => AnimValue::Vector3(node.transform.scale),
    })
}

/// Animator-lifetime arena of curve owners.
///
/// Duplicate bindings across states resolve to the same key, which is the
/// identity the cross-curve pairing relies on.
#[derive(Debug, Default)]
pub struct OwnerRegistry {
    owners: SlotMap<OwnerKey, CurveOwner>,
    lookup: FxHashMap<(NodeKey, PropertyKind), OwnerKey>,
}

impl OwnerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the owner for (node, property), creating it — and snapshotting
    /// the property's current value as the default — on first use.
    pub(crate) fn get_or_create(
        &mut self,
        scene: &Scene,
        node: NodeKey,
        property: PropertyKind,
    ) -> OwnerKey {
        if let Some(&key) = self.lookup.get(&(node, property)) {
            return key;
        }
        let default_value =
            read_property(scene, node, property).unwrap_or_else(|| property.identity_value());
        let key = self.owners.insert(CurveOwner {
            node,
            property,
            default_value,
            fixed_pose_value: default_value,
            cross_curve_mark: 0,
            cross_curve_index: 0,
        });
        self.lookup.insert((node, property), key);
        key
    }

    #[must_use]
    pub fn find(&self, node: NodeKey, property: PropertyKind) -> Option<OwnerKey> {
        self.lookup.get(&(node, property)).copied()
    }

    /// Owners are never removed, so a key handed out by this registry always
    /// resolves.
    #[must_use]
    pub fn owner(&self, key: OwnerKey) -> &CurveOwner {
        &self.owners[key]
    }

    pub(crate) fn owner_mut(&mut self, key: OwnerKey) -> &mut CurveOwner {
        &mut self.owners[key]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
