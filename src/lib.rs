//! Animus — layered animation blending for real-time 3D scene graphs.
//!
//! Given a hierarchy of named animation states organized into layers, the
//! [`Animator`] advances playback time each frame, blends between states
//! during cross-fades, and writes interpolated transform values onto scene
//! nodes. Layers combine by override or additive blending; overlapping
//! transitions stay pose-continuous by freezing the in-flight pose.
//!
//! ```
//! use std::sync::Arc;
//! use animus::{
//!     AnimationClip, AnimationSystem, Animator, AnimatorController, AnimatorLayer,
//!     AnimatorState, CurveBinding, Interpolation, KeyframeCurve, Node, PropertyKind,
//!     Scene, WrapMode,
//! };
//! use glam::Vec3;
//!
//! let mut scene = Scene::new();
//! let root = scene.add_node(Node::new("rig"));
//! let hips = scene.add_to_parent(Node::new("hips"), root);
//!
//! let curve = Arc::new(KeyframeCurve::new(
//!     vec![0.0, 1.0],
//!     vec![Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)],
//!     Interpolation::Linear,
//! ));
//! let clip = Arc::new(AnimationClip::new(
//!     "idle",
//!     WrapMode::Loop,
//!     vec![CurveBinding {
//!         curve,
//!         property: PropertyKind::Position,
//!         target_path: "hips".into(),
//!     }],
//! ));
//!
//! let mut controller = AnimatorController::new();
//! let mut layer = AnimatorLayer::new("base");
//! layer.state_machine.add_state(AnimatorState::new("Idle", clip)).unwrap();
//! controller.add_layer(layer).unwrap();
//!
//! let mut animator = Animator::with_controller(root, Arc::new(controller));
//! animator.play("Idle", 0, 0.0, &mut scene);
//! let key = scene.add_animator(animator);
//!
//! AnimationSystem::update(&mut scene, 0.5);
//! assert_eq!(scene.get_node(hips).unwrap().transform.position.y, 0.5);
//! # let _ = key;
//! ```

pub mod animation;
pub mod errors;
pub mod scene;

pub use animation::{
    AnimValue, AnimationClip, AnimationCurve, AnimationSystem, Animator, AnimatorController,
    AnimatorLayer, AnimatorState, AnimatorStateMachine, BlendingMode, CurveBinding, CurveOwner,
    Interpolation, KeyframeCurve, LayerState, PlayState, PropertyKind, ValueKind, WrapMode,
};
pub use errors::{AnimError, Result};
pub use scene::{AnimatorKey, Node, NodeKey, Scene, Transform};
