use crate::scene::Scene;

/// Animation system.
///
/// Drives every animator registered on the scene, once per frame, before
/// the host's transform/render passes. Uses the `std::mem::take` technique
/// to avoid borrow conflicts between the animators and the nodes they write.
pub struct AnimationSystem;

impl AnimationSystem {
    /// Updates all enabled animators.
    ///
    /// # Arguments
    /// * `scene` - Scene reference
    /// * `dt` - Delta time per frame (in seconds)
    pub fn update(scene: &mut Scene, dt: f32) {
        // Temporarily take the animators out to avoid borrow conflicts
        let mut animators = std::mem::take(&mut scene.animators);

        for (_key, animator) in &mut animators {
            if animator.enabled {
                animator.update(dt, scene);
            }
        }

        // Return them after the update
        scene.animators = animators;
    }
}
