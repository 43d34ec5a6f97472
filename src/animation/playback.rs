use std::sync::Arc;

use smallvec::SmallVec;

use crate::animation::clip::WrapMode;
use crate::animation::controller::AnimatorState;
use crate::animation::curve_owner::OwnerKey;

/// Where one playback record is in its life cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Playing,
    /// Source side of an in-flight cross-fade.
    Fading,
    /// Destination side of an in-flight cross-fade.
    Crossing,
    /// A Clamp clip that reached its end; time no longer advances.
    Finished,
}

/// Per-(layer, state) binding data: the state plus one owner slot per curve
/// in its clip, in clip order. `None` marks a curve whose target path did
/// not resolve. Built once on first play, cached and reused on replay.
#[derive(Debug)]
pub struct StateData {
    pub state: Arc<AnimatorState>,
    pub owners: SmallVec<[Option<OwnerKey>; 8]>,
}

/// Mutable per-activation playback record. Each layer holds exactly two:
/// `src` (playing / fading out) and `dest` (fading in, promoted to `src`
/// when the transition completes).
#[derive(Debug, Clone, Default)]
pub struct StatePlayback {
    pub data: Option<Arc<StateData>>,
    /// Elapsed seconds within the clip, kept inside `[0, end_time]`.
    pub frame_time: f32,
    pub play_state: PlayState,
}

impl StatePlayback {
    pub(crate) fn reset(&mut self, data: Arc<StateData>, frame_time: f32, play_state: PlayState) {
        self.data = Some(data);
        self.frame_time = frame_time;
        self.play_state = play_state;
    }

    pub(crate) fn clear(&mut self) {
        self.data = None;
        self.frame_time = 0.0;
        self.play_state = PlayState::Playing;
    }

    #[must_use]
    pub fn state(&self) -> Option<&Arc<AnimatorState>> {
        self.data.as_ref().map(|d| &d.state)
    }

    /// Advances `frame_time` by `dt`, wrapping (Loop) or clamping (Clamp)
    /// per the clip's wrap mode. Only a `Playing` record transitions to
    /// `Finished`; once finished, time no longer moves.
    pub(crate) fn advance(&mut self, dt: f32) {
        let Some(data) = &self.data else {
            return;
        };
        if self.play_state == PlayState::Finished {
            return;
        }

        let clip = &data.state.clip;
        let end = clip.end_time;
        if end <= 0.0 {
            self.frame_time = 0.0;
            return;
        }

        self.frame_time += dt;
        match clip.wrap_mode {
            WrapMode::Loop => {
                if self.frame_time >= end || self.frame_time < 0.0 {
                    self.frame_time = self.frame_time.rem_euclid(end);
                }
            }
            WrapMode::Clamp => {
                if self.frame_time >= end {
                    self.frame_time = end;
                    if self.play_state == PlayState::Playing {
                        self.play_state = PlayState::Finished;
                    }
                } else if self.frame_time < 0.0 {
                    self.frame_time = 0.0;
                }
            }
        }
    }
}
