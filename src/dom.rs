use anyhow::anyhow;
use glam::Vec2;
use web_sys as web;

use crate::constants::{CANVAS_FILL_STYLE, PLACEHOLDER_PROPERTY};
use crate::core::theme::{placeholder_gradient, Palette};
use crate::core::Viewport;
use crate::error::BackgroundError;

#[inline]
pub fn window() -> Result<web::Window, BackgroundError> {
    web::window().ok_or(BackgroundError::NoWindow)
}

/// Top-left corner of the canvas in client coordinates.
#[inline]
pub fn canvas_origin(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

/// Match the backing store to the CSS box and return the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    canvas.set_width(rect.width().max(0.0) as u32);
    canvas.set_height(rect.height().max(0.0) as u32);
    Viewport::new(canvas.width() as f32, canvas.height() as f32)
}

/// Hide the canvas from assistive technology and stretch it over its container.
pub fn mark_decorative(canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    canvas
        .set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow!("aria-hidden: {:?}", e))?;
    let style = canvas.style();
    for (name, value) in CANVAS_FILL_STYLE {
        style
            .set_property(name, value)
            .map_err(|e| anyhow!("style {}: {:?}", name, e))?;
    }
    Ok(())
}

pub fn show_placeholder(canvas: &web::HtmlCanvasElement, palette: &Palette) {
    _ = canvas
        .style()
        .set_property(PLACEHOLDER_PROPERTY, &placeholder_gradient(palette));
}

pub fn clear_placeholder(canvas: &web::HtmlCanvasElement) {
    _ = canvas.style().remove_property(PLACEHOLDER_PROPERTY);
}
