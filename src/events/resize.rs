use std::cell::RefCell;
use std::rc::Rc;

use web_sys as web;

use super::EventListener;
use crate::constants::RESIZE_EVENT;
use crate::dom;
use crate::frame::FrameContext;

/// Resize the backing store and respawn the whole field on window resize.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<EventListener> {
    let canvas = canvas.clone();
    let ctx = Rc::downgrade(ctx);
    EventListener::new(window, RESIZE_EVENT, move |_ev: web::Event| {
        let Some(ctx) = ctx.upgrade() else {
            return;
        };
        let viewport = dom::sync_canvas_backing_size(&canvas);
        ctx.borrow_mut().scene.resize(viewport);
    })
}
