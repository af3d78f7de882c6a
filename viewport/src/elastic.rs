//! Rubber-band resistance curve.
//!
//! Maps "how far past the edge the content would be" to "how far past the
//! edge it is drawn". The result grows quickly for small overshoots and then
//! flattens out, approaching `span` without ever reaching it.

#[cfg(test)]
#[path = "elastic_test.rs"]
mod elastic_test;

use crate::consts::RESISTANCE_COEFFICIENT;

/// Damped overscroll distance for a raw `offset` past an edge.
///
/// `offset` must be non-negative and `span` strictly positive. The world
/// height doubles as `span` for vertical bounds; [`crate::config`] guarantees
/// it is never zero.
#[must_use]
pub fn resistance(offset: f64, span: f64) -> f64 {
    (1.0 - 1.0 / ((offset * RESISTANCE_COEFFICIENT / span) + 1.0)) * span
}
