use crate::constants::STATS_EVERY_FRAMES;
use crate::dom;
use crate::render::CanvasSurface;
use mesh_core::{FrameRenderer, Layer, Scene, Viewport, ViewportParams};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct FrameContext {
    pub scene: Scene,
    pub renderer: FrameRenderer,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    /// Shared with the resize handler, which refits it after a debounce.
    pub viewport: Rc<RefCell<Viewport>>,
    pub viewport_params: ViewportParams,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        let dpr = dom::device_pixel_ratio();
        if dpr != self.viewport.borrow().dpr {
            log::info!("[frame] device pixel ratio changed to {dpr}");
            let fitted = dom::fit_canvas(
                &self.canvas,
                self.surface.context(),
                dpr,
                &self.viewport_params,
            );
            *self.viewport.borrow_mut() = fitted;
        }
        let viewport = *self.viewport.borrow();
        self.renderer
            .render(&mut self.scene, &mut self.surface, &viewport, now_ms);

        self.frames += 1;
        if self.frames % STATS_EVERY_FRAMES == 0 {
            let stats = self.scene.stats();
            log::debug!(
                "[frame] #{} live={} spawned={} retired={} heartbeats={} surface edges={}",
                self.frames,
                self.scene.pulses().len(),
                stats.spawned,
                stats.retired,
                stats.heartbeats,
                self.scene.edges(Layer::Surface).len()
            );
        }
    }
}

/// Stops the animation loop started by [`start_loop`].
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        log::info!("[frame] loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let callback = slot.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

/// Run `frame_ctx` once per display refresh. Each frame re-submits the
/// request only while the returned handle has not been stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame(now_ms);
        if running_tick.get() {
            pending_tick.set(request_frame(&tick_clone));
        }
    }) as Box<dyn FnMut(f64)>));

    pending.set(request_frame(&tick));
    LoopHandle { running, pending }
}
