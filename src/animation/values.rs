use glam::{Quat, Vec2, Vec3, Vec4};

/// Closed set of value kinds the blending engine understands.
///
/// Blend and diff functions dispatch on this tag, never on property names,
/// so adding a kind is a compile-time-enforced change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Float,
    Vector2,
    Vector3,
    Vector4,
    Quaternion,
}

/// A sampled animation value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimValue {
    Float(f32),
    Vector2(Vec2),
    Vector3(Vec3),
    Vector4(Vec4),
    Quaternion(Quat),
}

impl AnimValue {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            AnimValue::Float(_) => ValueKind::Float,
            AnimValue::Vector2(_) => ValueKind::Vector2,
            AnimValue::Vector3(_) => ValueKind::Vector3,
            AnimValue::Vector4(_) => ValueKind::Vector4,
            AnimValue::Quaternion(_) => ValueKind::Quaternion,
        }
    }

    #[must_use]
    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            AnimValue::Vector3(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_quat(&self) -> Option<Quat> {
        match self {
            AnimValue::Quaternion(q) => Some(*q),
            _ => None,
        }
    }
}

/// Keyframe payload types the built-in curve can interpolate.
pub trait Interpolatable: Copy {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;

    fn into_value(self) -> AnimValue;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }

    fn into_value(self) -> AnimValue {
        AnimValue::Float(self)
    }
}

impl Interpolatable for Vec2 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }

    fn into_value(self) -> AnimValue {
        AnimValue::Vector2(self)
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }

    fn into_value(self) -> AnimValue {
        AnimValue::Vector3(self)
    }
}

impl Interpolatable for Vec4 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }

    fn into_value(self) -> AnimValue {
        AnimValue::Vector4(self)
    }
}

impl Interpolatable for Quat {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }

    fn into_value(self) -> AnimValue {
        AnimValue::Quaternion(self)
    }
}
