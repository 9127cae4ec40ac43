use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys as web;

use crate::config::BackgroundConfig;
use crate::core::{CachedTheme, Palette, RenderLoop, Scene, ThemeProvider};
use crate::dom;
use crate::error::BackgroundError;
use crate::events::{self, EventListener};
use crate::frame::{self, FrameContext, RafScheduler, TickSlot};
use crate::render::CanvasSurface;
use crate::style::CssTheme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("auth-background loaded");
    Ok(())
}

/// A mounted background. Dropping it (or `free()` from JS) unmounts.
#[wasm_bindgen]
pub struct BackgroundHandle {
    canvas: web::HtmlCanvasElement,
    ctx: Option<Rc<RefCell<FrameContext>>>,
    tick: Option<TickSlot>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl BackgroundHandle {
    /// Stop the frame loop and remove every listener. Safe to call twice.
    pub fn unmount(&mut self) {
        let Some(ctx) = self.ctx.take() else {
            return;
        };
        ctx.borrow_mut().frame_loop.cancel();
        self.listeners.clear();
        if let Some(tick) = self.tick.take() {
            tick.borrow_mut().take();
        }
        log::info!("[mount] unmounted #{}", self.canvas.id());
    }

    #[wasm_bindgen(js_name = isAnimating)]
    pub fn is_animating(&self) -> bool {
        self.ctx
            .as_ref()
            .is_some_and(|c| c.borrow().frame_loop.is_live())
    }

    #[wasm_bindgen(js_name = waveCount)]
    pub fn wave_count(&self) -> usize {
        self.ctx
            .as_ref()
            .map_or(0, |c| c.borrow().scene.field().len())
    }

    /// Re-read theme colors on the next frame (only matters with theme caching).
    #[wasm_bindgen(js_name = invalidateTheme)]
    pub fn invalidate_theme(&self) {
        if let Some(c) = &self.ctx {
            c.borrow_mut().scene.theme_mut().invalidate();
        }
    }
}

impl BackgroundHandle {
    fn placeholder(
        canvas: web::HtmlCanvasElement,
        palette: &Palette,
        reason: BackgroundError,
    ) -> Self {
        if reason.is_degraded_host() {
            log::warn!("[mount] {}; showing static placeholder", reason);
        } else {
            log::error!("[mount] {}; showing static placeholder", reason);
        }
        dom::show_placeholder(&canvas, palette);
        Self {
            canvas,
            ctx: None,
            tick: None,
            listeners: Vec::new(),
        }
    }
}

impl Drop for BackgroundHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[wasm_bindgen(js_name = mountBackground)]
pub fn mount_background(canvas: web::HtmlCanvasElement) -> Result<BackgroundHandle, JsValue> {
    mount(canvas, BackgroundConfig::default()).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = mountBackgroundWith)]
pub fn mount_background_with(
    canvas: web::HtmlCanvasElement,
    seed: Option<u64>,
    cache_theme: bool,
) -> Result<BackgroundHandle, JsValue> {
    mount(canvas, BackgroundConfig { seed, cache_theme }).map_err(JsValue::from)
}

fn mount(
    canvas: web::HtmlCanvasElement,
    config: BackgroundConfig,
) -> Result<BackgroundHandle, BackgroundError> {
    dom::mark_decorative(&canvas)?;

    let window = match dom::window() {
        Ok(w) => w,
        Err(reason) => {
            return Ok(BackgroundHandle::placeholder(
                canvas,
                &Palette::default(),
                reason,
            ))
        }
    };
    let mut css_theme = CssTheme::new(&window);

    let viewport = dom::sync_canvas_backing_size(&canvas);
    if let Err(reason) = CanvasSurface::acquire(&canvas) {
        let palette = css_theme.palette();
        return Ok(BackgroundHandle::placeholder(canvas, &palette, reason));
    }
    dom::clear_placeholder(&canvas);

    let theme: Box<dyn ThemeProvider> = if config.cache_theme {
        Box::new(CachedTheme::new(css_theme))
    } else {
        Box::new(css_theme)
    };
    let mut scene = Scene::new(theme, config.rng());
    scene.attach(viewport);

    let tick = TickSlot::default();
    let ctx = Rc::new(RefCell::new(FrameContext {
        scene,
        canvas: canvas.clone(),
        frame_loop: RenderLoop::new(RafScheduler::new(window.clone(), tick.clone())),
    }));

    let listeners = vec![
        events::wire_resize(&window, &canvas, &ctx)?,
        events::wire_pointermove(&canvas, &ctx)?,
    ];
    frame::start_loop(&ctx, &tick);

    log::info!(
        "[mount] #{} {}x{} waves={} cache_theme={}",
        canvas.id(),
        viewport.width,
        viewport.height,
        ctx.borrow().scene.field().len(),
        config.cache_theme
    );
    Ok(BackgroundHandle {
        canvas,
        ctx: Some(ctx),
        tick: Some(tick),
        listeners,
    })
}
