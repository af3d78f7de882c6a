//! Viewport geometry and world bounds.

use serde::{Deserialize, Serialize};

use crate::camera::{Point, Size};
use crate::consts::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_TOP_OF_WORLD};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("viewport size must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("anchor point must be finite, got ({x}, {y})")]
    InvalidAnchor { x: f64, y: f64 },
    #[error("zoom range must satisfy 0 < min <= max, got [{min}, {max}]")]
    InvalidZoomRange { min: f64, max: f64 },
    #[error("top of world must be positive and finite, got {0}")]
    InvalidWorldHeight(f64),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the controller needs to know about the host surface and world.
///
/// `anchor` locates the scene origin within the viewport as a fraction of
/// its size; (0.5, 0.5) is the center. The world spans `[0, top_of_world]`
/// vertically and is unbounded horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub viewport: Size,
    #[serde(default = "default_anchor")]
    pub anchor: Point,
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    #[serde(default = "default_top_of_world")]
    pub top_of_world: f64,
}

impl ViewportConfig {
    /// Config for a `width` x `height` viewport with default anchor and bounds.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Size::new(width, height),
            anchor: default_anchor(),
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            top_of_world: DEFAULT_TOP_OF_WORLD,
        }
    }

    /// Parse a JSON config and validate it.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the controller's math relies on.
    ///
    /// A positive `top_of_world` keeps the resistance curve's span non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.viewport;
        if !is_positive(width) || !is_positive(height) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        if !self.anchor.x.is_finite() || !self.anchor.y.is_finite() {
            return Err(ConfigError::InvalidAnchor { x: self.anchor.x, y: self.anchor.y });
        }
        if !is_positive(self.min_zoom) || !is_positive(self.max_zoom) || self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvalidZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        if !is_positive(self.top_of_world) {
            return Err(ConfigError::InvalidWorldHeight(self.top_of_world));
        }
        Ok(())
    }

    /// Screen offset of the scene origin from the viewport's bottom-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.viewport.width * self.anchor.x, self.viewport.height * self.anchor.y)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn default_anchor() -> Point {
    Point::new(0.5, 0.5)
}

fn default_min_zoom() -> f64 {
    DEFAULT_MIN_ZOOM
}

fn default_max_zoom() -> f64 {
    DEFAULT_MAX_ZOOM
}

fn default_top_of_world() -> f64 {
    DEFAULT_TOP_OF_WORLD
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
