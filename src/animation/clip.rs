use std::sync::Arc;

use crate::animation::curve::AnimationCurve;
use crate::animation::curve_owner::PropertyKind;

/// What to do with playback time past the clip's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Loop,
    Clamp,
}

/// Ties one curve to one target property, addressed by a node path relative
/// to the animator's root.
#[derive(Debug, Clone)]
pub struct CurveBinding {
    pub curve: Arc<dyn AnimationCurve>,
    pub property: PropertyKind,
    pub target_path: String,
}

/// An immutable, pre-loaded animation clip.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub wrap_mode: WrapMode,
    /// Time of the latest keyframe across all curves, in seconds.
    pub end_time: f32,
    pub curves: Vec<CurveBinding>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, wrap_mode: WrapMode, curves: Vec<CurveBinding>) -> Self {
        let end_time = curves
            .iter()
            .map(|binding| binding.curve.end_time())
            .fold(0.0_f32, f32::max);

        Self {
            name: name.into(),
            wrap_mode,
            end_time,
            curves,
        }
    }
}
