//! Tuning constants for the viewport controller.

// ── Elastic resistance ──────────────────────────────────────────

/// Coefficient of the rubber-band curve. Native scroll views use 0.55.
pub const RESISTANCE_COEFFICIENT: f64 = 0.55;

/// Fraction of a finger delta applied while dragging further past an edge.
pub const OVERSCROLL_DRAG_FACTOR: f64 = 0.4;

// ── Inertia ─────────────────────────────────────────────────────

/// Per-frame multiplier applied to the velocity while gliding.
pub const VELOCITY_DAMPING: f64 = 0.9;

/// Below this magnitude on both axes the velocity snaps to zero.
pub const VELOCITY_REST_THRESHOLD: f64 = 0.1;

/// Weight of the previous velocity when folding in a new pan delta.
pub const VELOCITY_SMOOTHING: f64 = 0.5;

/// Velocity components are clamped to `[-MAX_VELOCITY, MAX_VELOCITY]`.
pub const MAX_VELOCITY: f64 = 30.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Share of a pinch increment kept when it pushes zoom further out of range.
pub const PINCH_EXCESS_FACTOR: f64 = 0.333;

/// Share of the zoom excess kept per frame while relaxing back into range.
pub const ZOOM_RELAXATION_FACTOR: f64 = 0.55;

// ── Defaults ────────────────────────────────────────────────────

/// Default minimum zoom.
pub const DEFAULT_MIN_ZOOM: f64 = 1.0;

/// Default maximum zoom.
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;

/// Default height of the world, in world units.
pub const DEFAULT_TOP_OF_WORLD: f64 = 1000.0;
