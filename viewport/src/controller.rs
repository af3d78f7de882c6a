use serde::Serialize;
use tracing::{debug, trace};

use crate::camera::{Camera, Change, Point, Rect};
use crate::config::{ConfigError, ViewportConfig};
use crate::consts::{
    MAX_VELOCITY, OVERSCROLL_DRAG_FACTOR, PINCH_EXCESS_FACTOR, VELOCITY_SMOOTHING, ZOOM_RELAXATION_FACTOR,
};
use crate::elastic::resistance;
use crate::gesture::{PanSample, PanState, PinchSample, PinchState, is_valid_scale};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// What the host applies to its world content each frame.
///
/// The world node is placed at `offset` in scene coordinates and scaled
/// uniformly by `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub offset: Point,
    pub scale: f64,
}

impl Transform {
    fn of(camera: &Camera) -> Self {
        Self { offset: Point::new(-camera.x(), -camera.y()), scale: camera.zoom() }
    }
}

/// Scroll-view style camera driven by pan and pinch gestures.
///
/// Gesture handlers mutate the camera as samples arrive; [`Self::tick`] runs
/// once per rendered frame to pull the camera back toward the world bounds
/// and zoom range, integrate leftover velocity, and refresh the transform.
///
/// Coordinate spaces:
/// - view: origin top-left of the viewport, y down (what the platform reports);
/// - scene: origin at the anchor point, y up;
/// - world: the content's own space, `scene = world * zoom - camera`.
#[derive(Debug, Clone)]
pub struct ViewportController {
    config: ViewportConfig,
    camera: Camera,
    pan: PanState,
    pinch: PinchState,
    last_pinch_point: Point,
    transform: Transform,
    dirty: bool,
}

impl ViewportController {
    /// Validate `config` and place the camera so the world's bottom-left
    /// corner sits at the viewport's bottom-left corner.
    pub fn new(config: ViewportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let origin = config.origin();
        let camera = Camera::new(origin.x, origin.y);
        Ok(Self {
            config,
            camera,
            pan: PanState::Idle,
            pinch: PinchState::Idle,
            last_pinch_point: Point::ZERO,
            transform: Transform::of(&camera),
            dirty: true,
        })
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Transform produced by the most recent correction step.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_active()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// Whether any gesture currently holds the camera.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_panning() || self.is_pinching()
    }

    /// Whether the next tick has correction work to do.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Scene-space focal point of the most recent pinch step.
    #[must_use]
    pub fn last_pinch_point(&self) -> Point {
        self.last_pinch_point
    }

    /// The part of the world currently visible.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        let origin = self.config.origin();
        let zoom = self.camera.zoom();
        Rect {
            x: (self.camera.x() - origin.x) / zoom,
            y: (self.camera.y() - origin.y) / zoom,
            width: self.config.viewport.width / zoom,
            height: self.config.viewport.height / zoom,
        }
    }

    // --- Coordinate conversion ---

    /// Convert a platform view location (top-left origin, y down) to scene space.
    #[must_use]
    pub fn view_to_scene(&self, view: Point) -> Point {
        let origin = self.config.origin();
        Point::new(view.x - origin.x, (self.config.viewport.height - view.y) - origin.y)
    }

    #[must_use]
    pub fn scene_to_world(&self, scene: Point) -> Point {
        let zoom = self.camera.zoom();
        Point::new((scene.x + self.camera.x()) / zoom, (scene.y + self.camera.y()) / zoom)
    }

    #[must_use]
    pub fn world_to_scene(&self, world: Point) -> Point {
        let zoom = self.camera.zoom();
        Point::new(world.x * zoom - self.camera.x(), world.y * zoom - self.camera.y())
    }

    // --- Gesture intake ---

    /// Apply one pan sample.
    ///
    /// Only the vertical component moves the camera. Both components feed
    /// the velocity estimate used for inertia after release.
    pub fn on_pan(&mut self, sample: PanSample) {
        let was_panning = self.pan.is_active();
        let Some(delta) = self.pan.apply(sample) else {
            if sample.phase.is_terminal() {
                if was_panning {
                    debug!(velocity_y = self.camera.velocity.y, "pan ended");
                }
                self.dirty = true;
            } else {
                debug!(x = sample.translation.x, y = sample.translation.y, "pan began");
            }
            return;
        };

        self.camera.set_y(self.camera.y() + delta.y);

        let velocity = self.camera.velocity;
        self.camera.velocity = Point::new(
            ((velocity.x - delta.x) * VELOCITY_SMOOTHING).clamp(-MAX_VELOCITY, MAX_VELOCITY),
            ((velocity.y + delta.y) * VELOCITY_SMOOTHING).clamp(-MAX_VELOCITY, MAX_VELOCITY),
        );
        self.dirty = true;
    }

    /// Apply one pinch sample, zooming around the gesture's focal point.
    ///
    /// Increments that push the zoom further outside the allowed range are
    /// cut to a third. Samples with a non-positive or non-finite scale are
    /// dropped without touching the camera.
    pub fn on_pinch(&mut self, sample: PinchSample) {
        if sample.phase.is_terminal() {
            if self.pinch.is_active() {
                debug!(zoom = self.camera.zoom(), "pinch ended");
            }
            self.pinch.apply(sample);
            self.dirty = true;
            return;
        }
        if !is_valid_scale(sample.scale) {
            debug!(scale = sample.scale, phase = ?sample.phase, "ignoring pinch sample with invalid scale");
            return;
        }

        let Some(mut scale) = self.pinch.apply(sample) else {
            if self.pinch.is_active() {
                debug!(scale = sample.scale, "pinch began");
            } else {
                debug!(scale = sample.scale, phase = ?sample.phase, "ignoring pinch sample outside a gesture");
            }
            return;
        };

        let zoom = self.camera.zoom();
        let new_zoom = zoom * scale;
        if (new_zoom > self.config.max_zoom && scale > 1.0) || (new_zoom < self.config.min_zoom && scale < 1.0) {
            let fixed_zoom = zoom + (new_zoom - zoom) * PINCH_EXCESS_FACTOR;
            scale = fixed_zoom / zoom;
        }

        let focal = self.view_to_scene(sample.location);
        self.zoom_about(focal, scale);
        self.last_pinch_point = focal;
        self.dirty = true;
    }

    // --- Frame ---

    /// Advance one frame and return the transform to render.
    ///
    /// Runs the correction step, then lets the camera glide if no gesture is
    /// holding it. Motion from the glide is corrected on the following tick.
    pub fn tick(&mut self) -> Transform {
        self.fix_camera();

        if !self.is_dragging() {
            let before = self.camera.position();
            let was_moving = self.camera.is_moving();
            self.camera.update_velocity();
            if self.camera.position() != before {
                self.dirty = true;
            }
            if was_moving && !self.camera.is_moving() {
                trace!(y = self.camera.y(), "inertia settled");
            }
        }

        self.transform
    }

    /// Per-frame correction: rubber-band the vertical bounds, relax the zoom
    /// back into range, and refresh the transform. No-op when clean.
    ///
    /// The dirty flag stays raised only when the correction itself moved the
    /// camera with no gesture holding it, so an overscrolled camera keeps
    /// settling on subsequent frames.
    pub fn fix_camera(&mut self) {
        if !self.dirty {
            return;
        }

        let before = (self.camera.x(), self.camera.y(), self.camera.zoom());

        self.resolve_vertical_bounds();
        if !self.pinch.is_active() {
            self.relax_zoom();
        }

        self.transform = Transform::of(&self.camera);

        let after = (self.camera.x(), self.camera.y(), self.camera.zoom());
        self.dirty = after != before && !self.is_dragging();
    }

    fn resolve_vertical_bounds(&mut self) {
        let rect = self.view_rect();
        let top_of_world = self.config.top_of_world;
        let origin_y = self.config.origin().y;
        let zoom = self.camera.zoom();
        let delta_y = self.camera.delta_y();
        let panning = self.pan.is_active();

        if rect.min_y() < 0.0 {
            if panning && delta_y < 0.0 {
                let change = self.follow_drag(delta_y);
                trace!(from = change.previous, to = change.current, "dragging below world");
            } else {
                let new_bottom = -resistance(rect.min_y().abs(), top_of_world);
                self.camera.set_y(new_bottom * zoom + origin_y);
                trace!(bottom = rect.min_y(), new_bottom, "rubber-banding below world");
            }
        } else if rect.max_y() > top_of_world {
            if panning && delta_y > 0.0 {
                let change = self.follow_drag(delta_y);
                trace!(from = change.previous, to = change.current, "dragging above world");
            } else {
                let new_top = top_of_world + resistance(rect.max_y() - top_of_world, top_of_world);
                self.camera.set_y((new_top - rect.height) * zoom + origin_y);
                trace!(top = rect.max_y(), new_top, "rubber-banding above world");
            }
        }
    }

    /// Replace the finger's last vertical step with a damped one, so the
    /// content trails the finger past the edge.
    fn follow_drag(&mut self, delta_y: f64) -> Change {
        self.camera.set_y(self.camera.last_y() + delta_y * OVERSCROLL_DRAG_FACTOR)
    }

    fn relax_zoom(&mut self) {
        let zoom = self.camera.zoom();
        let (min_zoom, max_zoom) = (self.config.min_zoom, self.config.max_zoom);

        let target = if zoom < min_zoom {
            min_zoom + (zoom - min_zoom) * ZOOM_RELAXATION_FACTOR
        } else if zoom > max_zoom {
            max_zoom + (zoom - max_zoom) * ZOOM_RELAXATION_FACTOR
        } else {
            return;
        };
        // Below float resolution the rescale only shuffles rounding error into x/y.
        if (target - zoom).abs() <= f64::EPSILON * zoom {
            return;
        }

        trace!(zoom, target, "relaxing zoom toward range");
        self.zoom_about(self.last_pinch_point, target / zoom);
    }

    /// Multiply the zoom by `scale` while keeping the world point under the
    /// scene point `focal` in place.
    fn zoom_about(&mut self, focal: Point, scale: f64) {
        let world = self.scene_to_world(focal);
        let projected = self.world_to_scene(world.scaled(scale));

        self.camera.set_zoom(self.camera.zoom() * scale);
        self.camera.set_x(self.camera.x() + projected.x - focal.x);
        self.camera.set_y(self.camera.y() + projected.y - focal.y);
    }
}
