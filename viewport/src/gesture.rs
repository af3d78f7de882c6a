//! Gesture model: phases, raw samples, and the per-gesture tracking state.
//!
//! The platform classifies touches into continuous pan and pinch gestures and
//! reports each as a stream of samples tagged with a [`Phase`]. `PanState` and
//! `PinchState` remember the previous raw sample between calls so the
//! controller can work with frame-to-frame increments instead of the
//! accumulated values the platform reports.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Lifecycle phase of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl Phase {
    /// Whether the gesture is over. Ended, cancelled, and failed are handled alike.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

/// One pan sample. `translation` is accumulated since the gesture began,
/// in view points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanSample {
    pub phase: Phase,
    pub translation: Point,
}

impl PanSample {
    #[must_use]
    pub fn new(phase: Phase, translation: Point) -> Self {
        Self { phase, translation }
    }
}

/// One pinch sample. `scale` is accumulated since the gesture began
/// (1.0 at the start); `location` is the focal point in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchSample {
    pub phase: Phase,
    pub scale: f64,
    pub location: Point,
}

impl PinchSample {
    #[must_use]
    pub fn new(phase: Phase, scale: f64, location: Point) -> Self {
        Self { phase, scale, location }
    }
}

/// Tracking state for the pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanState {
    /// No pan in progress.
    #[default]
    Idle,
    /// A pan is dragging the camera.
    Active {
        /// Raw translation of the previous sample, used to compute the next delta.
        last_translation: Point,
    },
}

impl PanState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Feed one sample and return the frame-to-frame delta for `Changed` samples.
    ///
    /// A `Changed` sample with no previous sample yields a zero delta and
    /// starts tracking from it.
    pub fn apply(&mut self, sample: PanSample) -> Option<Point> {
        match sample.phase {
            Phase::Began => {
                *self = Self::Active { last_translation: sample.translation };
                None
            }
            Phase::Changed => {
                let delta = match *self {
                    Self::Active { last_translation } => Point::new(
                        sample.translation.x - last_translation.x,
                        sample.translation.y - last_translation.y,
                    ),
                    Self::Idle => Point::ZERO,
                };
                *self = Self::Active { last_translation: sample.translation };
                Some(delta)
            }
            Phase::Ended | Phase::Cancelled | Phase::Failed => {
                *self = Self::Idle;
                None
            }
        }
    }
}

/// Tracking state for the pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PinchState {
    /// No pinch in progress.
    #[default]
    Idle,
    /// A pinch is zooming the camera.
    Active {
        /// Raw scale of the previous sample. Always positive and finite.
        last_scale: f64,
    },
}

impl PinchState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Feed one sample and return the incremental scale for `Changed` samples.
    ///
    /// Samples whose scale is not a positive finite number are ignored
    /// entirely: the state is left as it was and nothing is returned. Only
    /// `Began` starts tracking; a `Changed` sample while idle is dropped.
    pub fn apply(&mut self, sample: PinchSample) -> Option<f64> {
        if sample.phase.is_terminal() {
            *self = Self::Idle;
            return None;
        }
        if !is_valid_scale(sample.scale) {
            return None;
        }
        match (sample.phase, *self) {
            (Phase::Began, _) => {
                *self = Self::Active { last_scale: sample.scale };
                None
            }
            (Phase::Changed, Self::Active { last_scale }) => {
                *self = Self::Active { last_scale: sample.scale };
                Some(sample.scale / last_scale)
            }
            _ => None,
        }
    }
}

/// A raw pinch scale the controller can divide by.
#[must_use]
pub fn is_valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}
