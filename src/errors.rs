//! Error Types
//!
//! Runtime resolution misses (unknown state names, missing layers) are
//! deliberately *not* errors — animator graphs are frequently under active
//! authoring, so those are silent no-ops reported through
//! [`Animator::last_command_resolved`](crate::animation::Animator::last_command_resolved).
//! [`AnimError`] only covers construction-time failures that indicate a
//! broken setup.

use thiserror::Error;

/// The error type for animator construction APIs.
#[derive(Error, Debug)]
pub enum AnimError {
    /// A state with the same name already exists in the state machine.
    #[error("duplicate animator state: {0}")]
    DuplicateState(String),

    /// A layer with the same name already exists on the controller.
    #[error("duplicate animator layer: {0}")]
    DuplicateLayer(String),
}

pub type Result<T> = std::result::Result<T, AnimError>;
