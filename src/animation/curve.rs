use std::fmt;

use crate::animation::values::{AnimValue, Interpolatable};

/// A pre-baked mapping from clip time (seconds) to a value.
///
/// The engine only ever calls [`evaluate`](AnimationCurve::evaluate); how the
/// curve stores and interpolates its keyframes is the authoring pipeline's
/// concern. [`KeyframeCurve`] is the built-in implementation.
pub trait AnimationCurve: fmt::Debug + Send + Sync {
    fn evaluate(&self, time: f32) -> AnimValue;

    /// Time of the last keyframe, in seconds.
    fn end_time(&self) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Linear,
    Step,
}

/// Sorted keyframe curve with linear or step interpolation.
///
/// Samples clamp to the first/last keyframe outside the keyed range.
#[derive(Debug, Clone)]
pub struct KeyframeCurve<T: Interpolatable> {
    times: Vec<f32>,
    values: Vec<T>,
    interpolation: Interpolation,
}

impl<T: Interpolatable> KeyframeCurve<T> {
    /// # Panics
    ///
    /// Panics if `times` is empty or the lengths differ; an unkeyed curve
    /// has no value to produce.
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: Interpolation) -> Self {
        assert!(!times.is_empty(), "curve must have at least one keyframe");
        assert_eq!(times.len(), values.len(), "times/values length mismatch");
        Self {
            times,
            values,
            interpolation,
        }
    }

    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        // First index whose time is strictly greater than `time`
        let next = self.times.partition_point(|&t| t <= time);
        if next == 0 {
            return self.values[0];
        }
        let len = self.times.len();
        if next >= len {
            return self.values[len - 1];
        }

        let index = next - 1;
        match self.interpolation {
            Interpolation::Step => self.values[index],
            Interpolation::Linear => {
                let t0 = self.times[index];
                let t1 = self.times[next];
                let dt = t1 - t0;
                let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
                T::interpolate_linear(self.values[index], self.values[next], t.clamp(0.0, 1.0))
            }
        }
    }
}

impl<T> AnimationCurve for KeyframeCurve<T>
where
    T: Interpolatable + fmt::Debug + Send + Sync,
{
    fn evaluate(&self, time: f32) -> AnimValue {
        self.sample(time).into_value()
    }

    fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }
}
