use glam::{Affine3A, Quat, Vec3};

/// Transform component
///
/// Wraps a node's position, rotation and scale (TRS) together with a cached
/// local matrix and shadow-state dirty checking. Animated writes go through
/// the public fields and are picked up by [`Transform::update_local_matrix`]
/// on the host's next transform pass.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    local_matrix: Affine3A,

    // Shadow state for dirty checking
    last_position: Vec3,
    last_rotation: Quat,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Quat::IDENTITY,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    /// Recomputes the local matrix if the TRS fields changed since the last
    /// call. Returns whether anything changed.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.local_matrix =
                Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position);

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    /// Forces a matrix rebuild on the next update, even if the TRS fields
    /// compare equal (e.g. after an in-place mutation through a raw pointer
    /// or an animated write that must be visible this frame).
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }

    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.force_update
            || self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
