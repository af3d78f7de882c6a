//! Drives a [`ViewportController`] from script events, standing in for the
//! render loop of a real host.

use serde::Serialize;
use viewport::{Point, ViewportController};

use crate::script::ScriptEvent;

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

/// One rendered frame as the host would see it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub offset: Point,
    pub scale: f64,
    pub velocity: Point,
    pub dragging: bool,
}

pub struct Replay {
    controller: ViewportController,
    frames: u64,
}

impl Replay {
    #[must_use]
    pub fn new(controller: ViewportController) -> Self {
        Self { controller, frames: 0 }
    }

    #[must_use]
    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Feed one event. Gesture samples are applied immediately; ticks render
    /// frames and return their records in order.
    pub fn apply(&mut self, event: ScriptEvent) -> Vec<FrameRecord> {
        match event {
            ScriptEvent::Pan(sample) => {
                self.controller.on_pan(sample);
                Vec::new()
            }
            ScriptEvent::Pinch(sample) => {
                self.controller.on_pinch(sample);
                Vec::new()
            }
            ScriptEvent::Tick { count } => (0..count).map(|_| self.tick()).collect(),
        }
    }

    /// Render one frame.
    pub fn tick(&mut self) -> FrameRecord {
        let transform = self.controller.tick();
        self.frames += 1;
        FrameRecord {
            frame: self.frames,
            offset: transform.offset,
            scale: transform.scale,
            velocity: self.controller.camera().velocity,
            dragging: self.controller.is_dragging(),
        }
    }
}
