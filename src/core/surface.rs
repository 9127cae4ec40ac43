use glam::Vec2;

use super::geometry::Viewport;

/// One color stop of a gradient; `offset` runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop<'a> {
    pub offset: f32,
    pub color: &'a str,
}

/// Drawing target for the background.
///
/// The browser implementation wraps a 2D canvas context; tests use a recorder.
pub trait Surface {
    fn viewport(&self) -> Viewport;

    /// Fill the whole surface with a linear gradient from the top-left to the
    /// bottom-right corner.
    fn fill_backdrop(&mut self, stops: &[GradientStop<'_>]);

    /// Fill a disc of `radius` around `center` with a radial gradient fading
    /// from `color` to transparent, composited at `opacity`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, color: &str, opacity: f32);
}
