//! Gesture script format: one JSON event per line.
//!
//! ```text
//! # comment lines and blank lines are skipped
//! {"kind":"pan","phase":"began","translation":{"x":0,"y":0}}
//! {"kind":"pan","phase":"changed","translation":{"x":0,"y":-40}}
//! {"kind":"tick","count":3}
//! {"kind":"pinch","phase":"changed","scale":1.4,"location":{"x":120,"y":300}}
//! ```

use serde::Deserialize;
use viewport::{PanSample, PinchSample};

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptEvent {
    Pan(PanSample),
    Pinch(PinchSample),
    /// Advance `count` frames.
    Tick {
        #[serde(default = "one")]
        count: u32,
    },
}

fn one() -> u32 {
    1
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ScriptEvent>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}
