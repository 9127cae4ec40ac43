use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::color::Hsl;
use super::constants::*;
use super::geometry::Bounds;
use super::surface::Surface;

/// A single drifting, pointer-shy glow.
#[derive(Clone, Debug)]
pub struct Wave {
    id: u64,
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub angle: f32,
    pub opacity: f32,
    pub direction: f32,
    color: Hsl,
    color_css: String,
}

impl Wave {
    /// Spawn a wave at `position` with randomized look and motion.
    pub fn spawn<R: Rng + ?Sized>(id: u64, position: Vec2, rng: &mut R) -> Self {
        let color = Hsl::new(
            WAVE_HUE,
            WAVE_SATURATION,
            WAVE_LIGHTNESS_MIN + rng.gen::<f32>() * WAVE_LIGHTNESS_SPAN,
        );
        Self {
            id,
            position,
            radius: RADIUS_MIN + rng.gen::<f32>() * RADIUS_SPAWN_SPAN,
            speed: SPEED_MIN + rng.gen::<f32>() * SPEED_SPAN,
            angle: rng.gen::<f32>() * TAU,
            opacity: OPACITY_MIN + rng.gen::<f32>() * OPACITY_SPAWN_SPAN,
            direction: if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 },
            color,
            color_css: color.to_string(),
        }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn color(&self) -> Hsl {
        self.color
    }

    /// Advance one frame: drift, react to the pointer, stay inside `bounds`.
    pub fn update(&mut self, pointer: Vec2, bounds: &Bounds) {
        self.angle += self.speed * self.direction;
        self.position += Vec2::new(self.angle.cos() * DRIFT_X, self.angle.sin() * DRIFT_Y);

        let to_pointer = pointer - self.position;
        let distance = to_pointer.length();
        if distance < POINTER_REACH {
            let force = (POINTER_REACH - distance) / POINTER_REACH;
            // atan2 keeps a well-defined heading when the pointer sits on the wave
            let heading = to_pointer.y.atan2(to_pointer.x);
            self.position -= Vec2::new(heading.cos(), heading.sin()) * force * PUSH_FACTOR;
            self.opacity = (self.opacity + force * OPACITY_GAIN).min(OPACITY_MAX);
            self.radius = (self.radius + force * RADIUS_GAIN).min(RADIUS_MAX);
        } else {
            self.opacity = (self.opacity - OPACITY_DECAY).max(OPACITY_MIN);
            self.radius = (self.radius - RADIUS_DECAY).max(RADIUS_MIN);
        }

        if bounds.x_outside(self.position.x) {
            self.direction = -self.direction;
        }
        if bounds.y_outside(self.position.y) {
            self.direction = -self.direction;
        }
        self.position = bounds.clamp(self.position);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_glow(self.position, self.radius, &self.color_css, self.opacity);
    }
}
