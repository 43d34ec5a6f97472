use std::sync::Arc;

use crate::animation::blend;
use crate::animation::controller::{AnimatorController, AnimatorLayer, AnimatorState, BlendingMode};
use crate::animation::curve_owner::{CurveOwner, OwnerKey, OwnerRegistry, PropertyKind};
use crate::animation::layer::{CrossFadeTransition, LayerRuntime, LayerState};
use crate::animation::playback::PlayState;
use crate::animation::values::AnimValue;
use crate::scene::{NodeKey, Scene};

/// The animation-blending engine for one scene-graph subtree.
///
/// Holds per-layer playback state across frames, resolves curve targets by
/// path relative to `root`, and writes blended transform values every
/// [`update`](Animator::update). Single-threaded: one `update` per frame,
/// driven by [`AnimationSystem`](crate::animation::AnimationSystem).
///
/// Unknown state names are silent no-ops by design (animator graphs are
/// often mid-authoring); [`last_command_resolved`](Animator::last_command_resolved)
/// makes that observable.
#[derive(Debug)]
pub struct Animator {
    root: NodeKey,
    controller: Option<Arc<AnimatorController>>,

    /// Playback multiplier applied to every layer; `0.0` pauses without
    /// resetting time.
    pub speed: f32,
    /// Skipped by the animation system when false.
    pub enabled: bool,

    layers: Vec<LayerRuntime>,
    owners: OwnerRegistry,
    last_command_resolved: bool,
}

impl Animator {
    #[must_use]
    pub fn new(root: NodeKey) -> Self {
        Self {
            root,
            controller: None,
            speed: 1.0,
            enabled: true,
            layers: Vec::new(),
            owners: OwnerRegistry::new(),
            last_command_resolved: false,
        }
    }

    #[must_use]
    pub fn with_controller(root: NodeKey, controller: Arc<AnimatorController>) -> Self {
        let mut animator = Self::new(root);
        animator.set_controller(controller);
        animator
    }

    /// Attaches (or replaces) the controller. Layer runtimes are rebuilt;
    /// the owner cache survives, so default-value snapshots are kept.
    pub fn set_controller(&mut self, controller: Arc<AnimatorController>) {
        self.layers = (0..controller.layers().len())
            .map(|_| LayerRuntime::new())
            .collect();
        self.controller = Some(controller);
    }

    #[must_use]
    pub fn controller(&self) -> Option<&Arc<AnimatorController>> {
        self.controller.as_ref()
    }

    #[must_use]
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Runtime state of one layer (playback records, transition progress).
    #[must_use]
    pub fn layer(&self, index: usize) -> Option<&LayerRuntime> {
        self.layers.get(index)
    }

    #[must_use]
    pub fn get_layer_by_name(&self, name: &str) -> Option<&AnimatorLayer> {
        self.controller
            .as_ref()?
            .layers()
            .iter()
            .find(|l| l.name == name)
    }

    /// Whether the most recent `play`/`cross_fade` call resolved its state
    /// name. Unresolved calls are silent no-ops.
    #[must_use]
    pub fn last_command_resolved(&self) -> bool {
        self.last_command_resolved
    }

    /// The cached owner for (node, property), if any state has bound it.
    #[must_use]
    pub fn curve_owner(&self, node: NodeKey, property: PropertyKind) -> Option<&CurveOwner> {
        self.owners.find(node, property).map(|key| self.owners.owner(key))
    }

    /// Key-level owner lookup; key equality across states is the owner
    /// caching guarantee.
    #[must_use]
    pub fn curve_owner_key(&self, node: NodeKey, property: PropertyKind) -> Option<OwnerKey> {
        self.owners.find(node, property)
    }

    /// Starts playing a state immediately.
    ///
    /// `layer_index < 0` searches all layers, first match wins.
    /// `normalized_offset` in `[0, 1]` maps to `clip_end_time * offset`.
    /// If the layer is already playing a different state, that state's bound
    /// properties are restored to their cached defaults before switching.
    pub fn play(
        &mut self,
        name: &str,
        layer_index: i32,
        normalized_offset: f32,
        scene: &mut Scene,
    ) {
        self.last_command_resolved = false;
        let Some((index, state)) = self.resolve_state(name, layer_index) else {
            log::debug!("play: no state named '{name}'");
            return;
        };

        let layer = &mut self.layers[index];

        // Pose revert: leave no residue from the state being switched away
        if layer.state != LayerState::Standby {
            if let Some(data) = layer.src.data.clone() {
                if data.state.name != state.name {
                    for key in data.owners.iter().flatten() {
                        self.owners.owner(*key).revert_default(scene);
                    }
                }
            }
        }

        let data = layer.resolve_state_data(&state, self.root, &mut self.owners, scene);
        let offset_time = state.clip.end_time * normalized_offset.clamp(0.0, 1.0);

        layer.state = LayerState::Playing;
        layer.src.reset(data, offset_time, PlayState::Playing);
        layer.dest.clear();
        self.last_command_resolved = true;
    }

    /// Starts a timed blend from the layer's current pose to `name`.
    ///
    /// `normalized_duration` is multiplied by the destination clip's end
    /// time, then clamped so the transition never reads past the destination
    /// clip's valid range. A cross-fade issued while one is in flight folds
    /// into it (the current blended pose is frozen and becomes the new
    /// source); transitions never stack.
    pub fn cross_fade(
        &mut self,
        name: &str,
        normalized_duration: f32,
        layer_index: i32,
        normalized_offset: f32,
        scene: &mut Scene,
    ) {
        self.last_command_resolved = false;
        let Some((index, state)) = self.resolve_state(name, layer_index) else {
            log::debug!("cross_fade: no state named '{name}'");
            return;
        };

        let layer = &mut self.layers[index];
        let data = layer.resolve_state_data(&state, self.root, &mut self.owners, scene);

        let end_time = state.clip.end_time;
        let offset_time = end_time * normalized_offset.clamp(0.0, 1.0);
        let duration = (end_time * normalized_duration.max(0.0)).min(end_time - offset_time);

        layer.dest.reset(data, offset_time, PlayState::Crossing);

        match layer.state {
            LayerState::Standby => {
                layer.pair_cross_curves(&mut self.owners, scene, true);
                layer.state = LayerState::FixedCrossFading;
            }
            LayerState::Playing => {
                layer.src.play_state = PlayState::Fading;
                layer.pair_cross_curves(&mut self.owners, scene, false);
                layer.state = LayerState::CrossFading;
            }
            LayerState::CrossFading | LayerState::FixedCrossFading => {
                layer.pair_fixed_pose(&mut self.owners, scene);
                layer.state = LayerState::FixedCrossFading;
            }
        }

        layer.transition = CrossFadeTransition {
            duration,
            elapsed: 0.0,
        };
        self.last_command_resolved = true;
    }

    /// Advances every non-standby layer by `dt * speed` seconds and writes
    /// the blended values onto the scene. A failure inside one layer (stale
    /// node, mismatched kind) never aborts the others.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        if !self.enabled {
            return;
        }
        let Some(controller) = self.controller.clone() else {
            return;
        };
        let dt = dt * self.speed;

        for (index, layer) in self.layers.iter_mut().enumerate() {
            let Some(cfg) = controller.layers().get(index) else {
                continue;
            };
            if layer.state == LayerState::Standby {
                continue;
            }
            layer.src.advance(dt);
            match layer.state {
                LayerState::Standby => {}
                LayerState::Playing => {
                    Self::update_playing(layer, index, cfg, &mut self.owners, scene);
                }
                LayerState::CrossFading | LayerState::FixedCrossFading => {
                    Self::update_cross_fade(layer, index, cfg, &mut self.owners, scene, dt);
                }
            }
        }
    }

    fn resolve_state(&self, name: &str, layer_index: i32) -> Option<(usize, Arc<AnimatorState>)> {
        let controller = self.controller.as_ref()?;
        let layers = controller.layers();
        if layer_index < 0 {
            return layers.iter().enumerate().find_map(|(i, layer)| {
                layer
                    .state_machine
                    .find_state_by_name(name)
                    .map(|s| (i, Arc::clone(s)))
            });
        }
        let index = layer_index as usize;
        let Some(layer) = layers.get(index) else {
            log::warn!("layer index {layer_index} out of range");
            return None;
        };
        layer
            .state_machine
            .find_state_by_name(name)
            .map(|s| (index, Arc::clone(s)))
    }

    fn update_playing(
        layer: &mut LayerRuntime,
        layer_index: usize,
        cfg: &AnimatorLayer,
        owners: &mut OwnerRegistry,
        scene: &mut Scene,
    ) {
        let Some(data) = layer.src.data.clone() else {
            return;
        };
        let time = layer.src.frame_time;
        let additive = layer_index > 0 && cfg.blending_mode == BlendingMode::Additive;

        for (curve_index, binding) in data.state.clip.curves.iter().enumerate() {
            let Some(owner_key) = data.owners[curve_index] else {
                continue;
            };
            let value = binding.curve.evaluate(time);
            // Additive layers diff against the clip's first keyframe
            let base = additive.then(|| binding.curve.evaluate(0.0));
            Self::write_blended(owners.owner(owner_key), scene, value, base, layer_index, cfg);
        }
    }

    fn update_cross_fade(
        layer: &mut LayerRuntime,
        layer_index: usize,
        cfg: &AnimatorLayer,
        owners: &mut OwnerRegistry,
        scene: &mut Scene,
        dt: f32,
    ) {
        layer.dest.advance(dt);
        layer.transition.elapsed += dt;
        let weight = layer.transition.cross_weight();
        let fixed = layer.state == LayerState::FixedCrossFading;

        let src_data = layer.src.data.clone();
        let dest_data = layer.dest.data.clone();
        let src_time = layer.src.frame_time;
        let dest_time = layer.dest.frame_time;

        for record in layer.cross_curves.live() {
            let owner = owners.owner(record.owner);

            let src_value = if fixed {
                owner.fixed_pose_value
            } else {
                record
                    .src_curve
                    .and_then(|i| {
                        src_data
                            .as_ref()
                            .map(|d| d.state.clip.curves[i].curve.evaluate(src_time))
                    })
                    .unwrap_or(owner.default_value)
            };
            let dest_value = record
                .dest_curve
                .and_then(|i| {
                    dest_data
                        .as_ref()
                        .map(|d| d.state.clip.curves[i].curve.evaluate(dest_time))
                })
                .unwrap_or(owner.default_value);

            let value = blend::interpolate(src_value, dest_value, weight);
            Self::write_blended(owner, scene, value, None, layer_index, cfg);
        }

        if weight >= 1.0 {
            // Transition complete: the destination becomes the new source
            layer.src = std::mem::take(&mut layer.dest);
            layer.src.play_state = PlayState::Playing;
            layer.state = LayerState::Playing;
        }
    }

    /// Writes one blended value through the layer-weighting rules: the first
    /// layer overrides at full weight; higher layers either lerp toward the
    /// value (Override) or accumulate a diff from `base` (Additive) — ratio
    /// diff for scale so additive scale multiplies, relative rotation for
    /// quaternions, subtraction otherwise.
    fn write_blended(
        owner: &CurveOwner,
        scene: &mut Scene,
        value: AnimValue,
        base: Option<AnimValue>,
        layer_index: usize,
        cfg: &AnimatorLayer,
    ) {
        if layer_index == 0 {
            owner.write_target(scene, value);
            return;
        }

        let current = owner.current_value(scene);
        let blended = match cfg.blending_mode {
            BlendingMode::Override => blend::interpolate(current, value, cfg.weight),
            BlendingMode::Additive => {
                let base = base.unwrap_or(owner.default_value);
                if owner.property == PropertyKind::Scale {
                    let diff = blend::multiplicative_diff(base, value);
                    blend::apply_multiplicative(current, diff, cfg.weight)
                } else {
                    let diff = blend::additive_diff(base, value);
                    blend::apply_additive(current, diff, cfg.weight)
                }
            }
        };
        owner.write_target(scene, blended);
    }
}
