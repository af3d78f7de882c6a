#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{VELOCITY_DAMPING, VELOCITY_REST_THRESHOLD};

/// A point or vector in view, scene, or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }
}

/// Width and height of the viewport, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with a bottom-left origin (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

/// The two sides of a single assignment to a tracked value.
///
/// Returned by the camera setters so callers can react to an assignment
/// without reading the history back out of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change {
    pub previous: f64,
    pub current: f64,
}

impl Change {
    #[must_use]
    pub fn delta(self) -> f64 {
        self.current - self.previous
    }
}

/// A value that remembers what it held before its most recent assignment.
///
/// Every `set` overwrites the history, even when the new value equals the
/// current one. Until the first `set`, the previous value equals the initial
/// value so the delta is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracked {
    current: f64,
    previous: f64,
}

impl Tracked {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { current: value, previous: value }
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.current
    }

    #[must_use]
    pub fn previous(self) -> f64 {
        self.previous
    }

    #[must_use]
    pub fn delta(self) -> f64 {
        self.current - self.previous
    }

    pub fn set(&mut self, value: f64) -> Change {
        self.previous = self.current;
        self.current = value;
        Change { previous: self.previous, current: self.current }
    }
}

/// View transform over an infinitely wide, vertically bounded world.
///
/// `x` / `y` locate the viewport's anchor point; `zoom` is a magnification
/// (1.0 = no zoom). `velocity` is in world units per frame and only drives
/// the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    x: Tracked,
    y: Tracked,
    zoom: Tracked,
    pub velocity: Point,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Camera {
    /// Camera at `(x, y)` with no zoom and no velocity.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: Tracked::new(x), y: Tracked::new(y), zoom: Tracked::new(1.0), velocity: Point::ZERO }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x.get()
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y.get()
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom.get()
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    #[must_use]
    pub fn last_x(&self) -> f64 {
        self.x.previous()
    }

    #[must_use]
    pub fn last_y(&self) -> f64 {
        self.y.previous()
    }

    #[must_use]
    pub fn last_zoom(&self) -> f64 {
        self.zoom.previous()
    }

    /// `x - last_x`.
    #[must_use]
    pub fn delta_x(&self) -> f64 {
        self.x.delta()
    }

    /// `y - last_y`. The direction of travel during overscroll resolution.
    #[must_use]
    pub fn delta_y(&self) -> f64 {
        self.y.delta()
    }

    pub fn set_x(&mut self, x: f64) -> Change {
        self.x.set(x)
    }

    pub fn set_y(&mut self, y: f64) -> Change {
        self.y.set(y)
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Change {
        self.zoom.set(zoom)
    }

    /// Advance inertial motion by one frame.
    ///
    /// Once both components are under the rest threshold the velocity snaps
    /// to exactly zero. Otherwise it is damped and the damped vertical
    /// component is added to `y`. The horizontal component is damped but
    /// never moves the camera.
    pub fn update_velocity(&mut self) {
        if self.velocity.x.abs() < VELOCITY_REST_THRESHOLD && self.velocity.y.abs() < VELOCITY_REST_THRESHOLD {
            self.velocity = Point::ZERO;
        } else {
            self.velocity = self.velocity.scaled(VELOCITY_DAMPING);
            self.set_y(self.y() + self.velocity.y);
        }
    }

    /// Whether the camera is gliding.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.velocity != Point::ZERO
    }
}
