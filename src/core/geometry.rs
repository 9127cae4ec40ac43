use glam::Vec2;

use super::constants::{AREA_PER_WAVE, BOUNDS_MARGIN};

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Builds a viewport, treating negative or non-finite sides as empty.
    pub fn new(width: f32, height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Number of waves a field of this size holds.
    #[inline]
    pub fn wave_count(&self) -> usize {
        (self.area() / AREA_PER_WAVE).floor() as usize
    }

    /// The viewport grown by the wave margin on every side.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: Vec2::splat(-BOUNDS_MARGIN),
            max: Vec2::new(self.width + BOUNDS_MARGIN, self.height + BOUNDS_MARGIN),
        }
    }
}

/// Axis-aligned rectangle waves are confined to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    #[inline]
    pub fn x_outside(&self, x: f32) -> bool {
        x < self.min.x || x > self.max.x
    }

    #[inline]
    pub fn y_outside(&self, y: f32) -> bool {
        y < self.min.y || y > self.max.y
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        !self.x_outside(p.x) && !self.y_outside(p.y)
    }

    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}
