use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::EventListener;
use crate::constants::POINTER_MOVE_EVENT;
use crate::dom;
use crate::frame::FrameContext;

/// Track the pointer over the canvas only; positions are canvas-relative.
pub fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<EventListener> {
    let canvas_for_handler = canvas.clone();
    let ctx = Rc::downgrade(ctx);
    EventListener::new(canvas, POINTER_MOVE_EVENT, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some(ctx) = ctx.upgrade() else {
            return;
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let origin = dom::canvas_origin(&canvas_for_handler);
        ctx.borrow_mut().scene.pointer_mut().track(client, origin);
    })
}
