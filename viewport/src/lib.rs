//! Elastic, inertial 2D viewport controller.
//!
//! This crate turns raw pan and pinch gesture samples into a damped camera
//! transform that behaves like a native scroll view: the view rubber-bands
//! past the world's vertical edges, keeps gliding after the finger lifts, and
//! zooms around the pinch focal point with soft limits. The host owns the
//! render surface; it forwards gesture samples and calls
//! [`controller::ViewportController::tick`] once per frame to obtain the
//! [`controller::Transform`] to apply to its world content.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Gesture intake and the per-frame correction step |
//! | [`camera`] | Camera state with one-step change tracking, points and rects |
//! | [`gesture`] | Gesture phases, samples, and per-gesture tracking state |
//! | [`elastic`] | Rubber-band resistance curve |
//! | [`config`] | Viewport geometry, zoom range, and world bounds |
//! | [`consts`] | Tuning constants (damping factors, thresholds, limits) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod controller;
pub mod elastic;
pub mod gesture;

pub use camera::{Camera, Change, Point, Rect, Size};
pub use config::{ConfigError, ViewportConfig};
pub use controller::{Transform, ViewportController};
pub use gesture::{PanSample, Phase, PinchSample};
