// Shared fakes for host-side tests.

#![allow(dead_code)]

use auth_background::core::{FrameId, FrameScheduler, GradientStop, Surface, Viewport};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Glow {
    pub center: Vec2,
    pub radius: f32,
    pub color: String,
    pub opacity: f32,
}

/// Surface that records every draw call.
pub struct Recorder {
    pub viewport: Viewport,
    pub backdrops: Vec<Vec<(f32, String)>>,
    pub glows: Vec<Glow>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            backdrops: Vec::new(),
            glows: Vec::new(),
        }
    }
}

impl Surface for Recorder {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn fill_backdrop(&mut self, stops: &[GradientStop<'_>]) {
        self.backdrops
            .push(stops.iter().map(|s| (s.offset, s.color.to_string())).collect());
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: &str, opacity: f32) {
        self.glows.push(Glow {
            center,
            radius,
            color: color.to_string(),
            opacity,
        });
    }
}

/// Scheduler that hands out increasing ids and remembers cancellations.
#[derive(Default)]
pub struct ManualScheduler {
    pub next: FrameId,
    pub cancelled: Vec<FrameId>,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        self.next += 1;
        Some(self.next)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.cancelled.push(id);
    }
}
