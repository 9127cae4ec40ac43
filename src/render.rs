use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{GradientStop, Surface, Viewport};
use crate::error::BackgroundError;

/// [`Surface`] over a canvas 2D context, valid for one frame.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Result<Self, BackgroundError> {
        if !canvas.is_connected() {
            return Err(BackgroundError::Detached);
        }
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(BackgroundError::NoContext)?;
        Ok(Self {
            ctx,
            viewport: Viewport::new(canvas.width() as f32, canvas.height() as f32),
        })
    }
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn fill_backdrop(&mut self, stops: &[GradientStop<'_>]) {
        let w = self.viewport.width as f64;
        let h = self.viewport.height as f64;
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, stop.color);
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: &str, opacity: f32) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, color);
        _ = gradient.add_color_stop(1.0, "transparent");

        self.ctx.save();
        self.ctx.set_global_alpha(opacity as f64);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, r, 0.0, TAU);
        self.ctx.fill();
        self.ctx.restore();
    }
}
