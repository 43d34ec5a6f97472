pub mod animator;
pub mod blend;
pub mod clip;
pub mod controller;
pub mod curve;
pub mod curve_owner;
pub mod layer;
pub mod playback;
pub mod pool;
pub mod system;
pub mod values;

pub use animator::Animator;
pub use clip::{AnimationClip, CurveBinding, WrapMode};
pub use controller::{
    AnimatorController, AnimatorLayer, AnimatorState, AnimatorStateMachine, BlendingMode,
};
pub use curve::{AnimationCurve, Interpolation, KeyframeCurve};
pub use curve_owner::{CurveOwner, OwnerKey, OwnerRegistry, PropertyKind};
pub use layer::{CrossFadeTransition, LayerRuntime, LayerState};
pub use playback::{PlayState, StateData, StatePlayback};
pub use pool::{CrossCurveData, Pool};
pub use system::AnimationSystem;
pub use values::{AnimValue, Interpolatable, ValueKind};
