//! Pure blend math over [`AnimValue`].
//!
//! Linear interpolation is used for everything except quaternions, which
//! interpolate spherically. Additive layering uses subtractive diffs for
//! floats and vectors, relative rotations (`conjugate(base) * value`) for
//! quaternions, and component-wise ratios for scale so that additive layers
//! multiply rather than add scale contributions.
//!
//! Mismatched kinds are a programmer error; the functions warn and fall back
//! to the incoming value so one bad curve never aborts the frame.

use glam::Quat;

use crate::animation::values::AnimValue;

/// Blend `a` toward `b` at `t` (clamped by callers to `[0, 1]`).
#[must_use]
pub fn interpolate(a: AnimValue, b: AnimValue, t: f32) -> AnimValue {
    match (a, b) {
        (AnimValue::Float(a), AnimValue::Float(b)) => AnimValue::Float(a + (b - a) * t),
        (AnimValue::Vector2(a), AnimValue::Vector2(b)) => AnimValue::Vector2(a.lerp(b, t)),
        (AnimValue::Vector3(a), AnimValue::Vector3(b)) => AnimValue::Vector3(a.lerp(b, t)),
        (AnimValue::Vector4(a), AnimValue::Vector4(b)) => AnimValue::Vector4(a.lerp(b, t)),
        (AnimValue::Quaternion(a), AnimValue::Quaternion(b)) => AnimValue::Quaternion(a.slerp(b, t)),
        (a, b) => {
            log::warn!("cannot blend {:?} with {:?}", a.kind(), b.kind());
            b
        }
    }
}

/// Subtractive diff from a base pose: `value - base` (relative rotation for
/// quaternions).
#[must_use]
pub fn additive_diff(base: AnimValue, value: AnimValue) -> AnimValue {
    match (base, value) {
        (AnimValue::Float(b), AnimValue::Float(v)) => AnimValue::Float(v - b),
        (AnimValue::Vector2(b), AnimValue::Vector2(v)) => AnimValue::Vector2(v - b),
        (AnimValue::Vector3(b), AnimValue::Vector3(v)) => AnimValue::Vector3(v - b),
        (AnimValue::Vector4(b), AnimValue::Vector4(v)) => AnimValue::Vector4(v - b),
        (AnimValue::Quaternion(b), AnimValue::Quaternion(v)) => {
            AnimValue::Quaternion(b.conjugate() * v)
        }
        (base, value) => {
            log::warn!("cannot diff {:?} against {:?}", value.kind(), base.kind());
            value
        }
    }
}

/// Ratio diff from a base pose: `value / base` component-wise.
///
/// Used for scale so that applying the diff multiplies the current scale.
/// A zero base component yields an infinite/NaN ratio; this is intentionally
/// left unguarded to match the reference behavior.
#[must_use]
pub fn multiplicative_diff(base: AnimValue, value: AnimValue) -> AnimValue {
    match (base, value) {
        (AnimValue::Float(b), AnimValue::Float(v)) => AnimValue::Float(v / b),
        (AnimValue::Vector2(b), AnimValue::Vector2(v)) => AnimValue::Vector2(v / b),
        (AnimValue::Vector3(b), AnimValue::Vector3(v)) => AnimValue::Vector3(v / b),
        (AnimValue::Vector4(b), AnimValue::Vector4(v)) => AnimValue::Vector4(v / b),
        // Relative rotation is already multiplicative
        (AnimValue::Quaternion(b), AnimValue::Quaternion(v)) => {
            AnimValue::Quaternion(b.conjugate() * v)
        }
        (base, value) => {
            log::warn!("cannot diff {:?} against {:?}", value.kind(), base.kind());
            value
        }
    }
}

/// Accumulates a subtractive diff onto the current value, scaled by `weight`.
#[must_use]
pub fn apply_additive(current: AnimValue, diff: AnimValue, weight: f32) -> AnimValue {
    match (current, diff) {
        (AnimValue::Float(c), AnimValue::Float(d)) => AnimValue::Float(c + d * weight),
        (AnimValue::Vector2(c), AnimValue::Vector2(d)) => AnimValue::Vector2(c + d * weight),
        (AnimValue::Vector3(c), AnimValue::Vector3(d)) => AnimValue::Vector3(c + d * weight),
        (AnimValue::Vector4(c), AnimValue::Vector4(d)) => AnimValue::Vector4(c + d * weight),
        (AnimValue::Quaternion(c), AnimValue::Quaternion(d)) => {
            AnimValue::Quaternion(c * scale_quaternion_weight(d, weight))
        }
        (current, diff) => {
            log::warn!("cannot apply {:?} onto {:?}", diff.kind(), current.kind());
            current
        }
    }
}

/// Accumulates a ratio diff onto the current value: `current * lerp(1, diff, weight)`.
#[must_use]
pub fn apply_multiplicative(current: AnimValue, diff: AnimValue, weight: f32) -> AnimValue {
    match (current, diff) {
        (AnimValue::Float(c), AnimValue::Float(d)) => {
            AnimValue::Float(c * (1.0 + (d - 1.0) * weight))
        }
        (AnimValue::Vector2(c), AnimValue::Vector2(d)) => {
            AnimValue::Vector2(c * glam::Vec2::ONE.lerp(d, weight))
        }
        (AnimValue::Vector3(c), AnimValue::Vector3(d)) => {
            AnimValue::Vector3(c * glam::Vec3::ONE.lerp(d, weight))
        }
        (AnimValue::Vector4(c), AnimValue::Vector4(d)) => {
            AnimValue::Vector4(c * glam::Vec4::ONE.lerp(d, weight))
        }
        (AnimValue::Quaternion(c), AnimValue::Quaternion(d)) => {
            AnimValue::Quaternion(c * scale_quaternion_weight(d, weight))
        }
        (current, diff) => {
            log::warn!("cannot apply {:?} onto {:?}", diff.kind(), current.kind());
            current
        }
    }
}

/// Scales a diff rotation's vector part by `weight`, keeping `w`.
///
/// This matches the reference engine's per-weight quaternion scaling: no
/// renormalization, exact pass-through at weight 1.
#[must_use]
pub fn scale_quaternion_weight(q: Quat, weight: f32) -> Quat {
    Quat::from_xyzw(q.x * weight, q.y * weight, q.z * weight, q.w)
}
