use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::animation::controller::AnimatorState;
use crate::animation::curve_owner::OwnerRegistry;
use crate::animation::playback::{StateData, StatePlayback};
use crate::animation::pool::{CrossCurveData, Pool};
use crate::scene::{NodeKey, Scene};

/// Per-layer state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayerState {
    /// Nothing has been played on this layer yet.
    #[default]
    Standby,
    Playing,
    /// Blending from a live source clip to a destination clip.
    CrossFading,
    /// Blending from a frozen pose snapshot to a destination clip (used when
    /// transitions overlap and the previous pose is not a single clip
    /// evaluation).
    FixedCrossFading,
}

/// Timing of the layer's single in-flight transition. A new cross-fade
/// replaces this descriptor; transitions never stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossFadeTransition {
    /// Seconds, already clamped so the destination clip is never read past
    /// its end.
    pub duration: f32,
    pub elapsed: f32,
}

impl CrossFadeTransition {
    /// Normalized transition progress in `[0, 1]`; a zero-length transition
    /// completes immediately.
    #[must_use]
    pub fn cross_weight(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

/// Runtime side of one controller layer.
#[derive(Debug, Default)]
pub struct LayerRuntime {
    pub state: LayerState,
    /// The pose playing or fading out.
    pub src: StatePlayback,
    /// The pose fading in; promoted to `src` when the transition completes.
    pub dest: StatePlayback,
    pub transition: CrossFadeTransition,

    /// Generation counter for cross-curve membership (see `CurveOwner`).
    pub(crate) cross_curve_mark: u64,
    pub(crate) cross_curves: Pool<CrossCurveData>,
    state_data: FxHashMap<String, Arc<StateData>>,
}

impl LayerRuntime {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Normalized progress of the current transition.
    #[must_use]
    pub fn cross_weight(&self) -> f32 {
        self.transition.cross_weight()
    }

    /// Number of live cross-curve records (test/diagnostics hook).
    #[must_use]
    pub fn cross_curve_count(&self) -> usize {
        self.cross_curves.len()
    }

    /// Returns the cached binding data for `state`, building it on first
    /// use: one owner per curve, resolved by target path relative to `root`.
    /// Unresolvable paths leave a `None` slot and the curve is skipped at
    /// evaluation time.
    pub(crate) fn resolve_state_data(
        &mut self,
        state: &Arc<AnimatorState>,
        root: NodeKey,
        owners: &mut OwnerRegistry,
        scene: &Scene,
    ) -> Arc<StateData> {
        if let Some(data) = self.state_data.get(&state.name) {
            return Arc::clone(data);
        }

        let clip = &state.clip;
        let mut list: SmallVec<[_; 8]> = SmallVec::with_capacity(clip.curves.len());
        for binding in &clip.curves {
            match scene.find_by_path(root, &binding.target_path) {
                Some(node) => list.push(Some(owners.get_or_create(scene, node, binding.property))),
                None => {
                    log::warn!(
                        "animation target '{}' not found under animator root",
                        binding.target_path
                    );
                    list.push(None);
                }
            }
        }

        let data = Arc::new(StateData {
            state: Arc::clone(state),
            owners: list,
        });
        self.state_data.insert(state.name.clone(), Arc::clone(&data));
        data
    }

    /// Pairs src and dest curves into fresh cross-curve records.
    ///
    /// Bumps the generation mark and rewinds the pool, then stamps each
    /// source owner with the mark and its buffer slot before merging the
    /// destination side. The mark lets the destination pass detect "already
    /// present in this transition's curve set" without a lookup table.
    pub(crate) fn pair_cross_curves(
        &mut self,
        owners: &mut OwnerRegistry,
        scene: &Scene,
        save_fixed_pose: bool,
    ) {
        self.cross_curve_mark += 1;
        self.cross_curves.reset_all();
        let mark = self.cross_curve_mark;

        if let Some(src_data) = self.src.data.clone() {
            for (curve_index, owner_key) in src_data.owners.iter().enumerate() {
                let Some(key) = *owner_key else { continue };
                let owner = owners.owner_mut(key);
                owner.cross_curve_mark = mark;
                owner.cross_curve_index = self.cross_curves.len();
                if save_fixed_pose {
                    owner.save_fixed_pose(scene);
                }
                let record = self.cross_curves.acquire();
                record.owner = key;
                record.src_curve = Some(curve_index);
            }
        }

        self.pair_dest_curves(owners, scene, save_fixed_pose);
    }

    /// Re-pairs an interrupted transition against a new destination.
    ///
    /// Every owner already in the buffer keeps its slot but has the current
    /// blended pose frozen into its fixed-pose value; stale curve indexes
    /// from the replaced transition are cleared so only the new destination
    /// is ever evaluated.
    pub(crate) fn pair_fixed_pose(&mut self, owners: &mut OwnerRegistry, scene: &Scene) {
        self.cross_curve_mark += 1;
        let mark = self.cross_curve_mark;

        for (index, record) in self.cross_curves.live_mut().iter_mut().enumerate() {
            let owner = owners.owner_mut(record.owner);
            owner.cross_curve_mark = mark;
            owner.cross_curve_index = index;
            owner.save_fixed_pose(scene);
            record.src_curve = None;
            record.dest_curve = None;
        }

        self.pair_dest_curves(owners, scene, true);
    }

    fn pair_dest_curves(
        &mut self,
        owners: &mut OwnerRegistry,
        scene: &Scene,
        save_fixed_pose: bool,
    ) {
        let mark = self.cross_curve_mark;
        let Some(dest_data) = self.dest.data.clone() else {
            return;
        };

        for (curve_index, owner_key) in dest_data.owners.iter().enumerate() {
            let Some(key) = *owner_key else { continue };
            let owner = owners.owner_mut(key);
            if owner.cross_curve_mark == mark {
                // Same property touched by both sides: one blended record
                let slot = owner.cross_curve_index;
                self.cross_curves.live_mut()[slot].dest_curve = Some(curve_index);
            } else {
                owner.cross_curve_mark = mark;
                owner.cross_curve_index = self.cross_curves.len();
                if save_fixed_pose {
                    owner.save_fixed_pose(scene);
                }
                let record = self.cross_curves.acquire();
                record.owner = key;
                record.dest_curve = Some(curve_index);
            }
        }
    }
}
