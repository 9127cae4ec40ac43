use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{FrameId, FrameOutcome, FrameScheduler, RenderLoop, Scene, ThemeProvider};
use crate::render::CanvasSurface;

/// Slot holding the requestAnimationFrame callback once the loop is wired.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        let tick = self.tick.borrow();
        let cb = tick.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        _ = self.window.cancel_animation_frame(id);
    }
}

pub struct FrameContext {
    pub scene: Scene<Box<dyn ThemeProvider>, StdRng>,
    pub canvas: web::HtmlCanvasElement,
    pub frame_loop: RenderLoop<RafScheduler>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let FrameContext {
            scene,
            canvas,
            frame_loop,
        } = self;
        frame_loop.tick(|| {
            let mut surface = CanvasSurface::acquire(canvas).ok();
            if scene.frame(surface.as_mut()) == FrameOutcome::SkippedNoSurface {
                log::trace!("[frame] surface unavailable, skipped");
            }
        });
    }
}

/// Install the frame callback and request the first frame.
///
/// The callback holds a weak reference so dropping the context releases it.
pub fn start_loop(ctx: &Rc<RefCell<FrameContext>>, tick: &TickSlot) {
    let weak = Rc::downgrade(ctx);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(ctx) = weak.upgrade() {
            ctx.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>));
    ctx.borrow_mut().frame_loop.start();
}
