use std::sync::Arc;

use crate::animation::clip::AnimationClip;
use crate::errors::{AnimError, Result};

/// How a layer's output combines with the layers below it.
///
/// The first layer always writes at full weight regardless of this mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendingMode {
    Override,
    Additive,
}

/// A named wrapper around one animation clip.
#[derive(Debug)]
pub struct AnimatorState {
    pub name: String,
    pub clip: Arc<AnimationClip>,
}

impl AnimatorState {
    #[must_use]
    pub fn new(name: impl Into<String>, clip: Arc<AnimationClip>) -> Self {
        Self {
            name: name.into(),
            clip,
        }
    }
}

/// The set of named states one layer can play.
#[derive(Debug, Default)]
pub struct AnimatorStateMachine {
    states: Vec<Arc<AnimatorState>>,
}

impl AnimatorStateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a state. Names are unique within a machine.
    pub fn add_state(&mut self, state: AnimatorState) -> Result<Arc<AnimatorState>> {
        if self.find_state_by_name(&state.name).is_some() {
            return Err(AnimError::DuplicateState(state.name));
        }
        let state = Arc::new(state);
        self.states.push(Arc::clone(&state));
        Ok(state)
    }

    #[must_use]
    pub fn find_state_by_name(&self, name: &str) -> Option<&Arc<AnimatorState>> {
        self.states.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn states(&self) -> &[Arc<AnimatorState>] {
        &self.states
    }
}

/// An independently weighted, independently state-machined animation track.
#[derive(Debug)]
pub struct AnimatorLayer {
    pub name: String,
    pub weight: f32,
    pub blending_mode: BlendingMode,
    pub state_machine: AnimatorStateMachine,
}

impl AnimatorLayer {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: 1.0,
            blending_mode: BlendingMode::Override,
            state_machine: AnimatorStateMachine::new(),
        }
    }
}

/// Ordered list of layers; index 0 is the base layer.
#[derive(Debug, Default)]
pub struct AnimatorController {
    layers: Vec<AnimatorLayer>,
}

impl AnimatorController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer, returning its index. Names are unique per controller.
    pub fn add_layer(&mut self, layer: AnimatorLayer) -> Result<usize> {
        if self.find_layer_index(&layer.name).is_some() {
            return Err(AnimError::DuplicateLayer(layer.name));
        }
        self.layers.push(layer);
        Ok(self.layers.len() - 1)
    }

    #[must_use]
    pub fn layers(&self) -> &[AnimatorLayer] {
        &self.layers
    }

    #[must_use]
    pub fn find_layer_index(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.name == name)
    }
}
