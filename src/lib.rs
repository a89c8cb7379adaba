#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, OPAQUE_CONTEXT, REGION_HEIGHT_PX};
use instant::Instant;
use mesh_core::{FrameRenderer, Layer, MeshConfig, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod frame;
mod render;
mod resize;

thread_local! {
    static LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neural-mesh-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Halt the animation. The last drawn frame stays on the canvas.
#[wasm_bindgen]
pub fn stop() {
    LOOP.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.stop();
        }
    });
}

/// True while the animation loop is scheduling frames.
#[wasm_bindgen]
pub fn is_running() -> bool {
    LOOP.with(|slot| slot.borrow().as_ref().is_some_and(|h| h.is_running()))
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas, OPAQUE_CONTEXT)?;
    dom::ensure_region_height(&canvas, REGION_HEIGHT_PX);

    let config = MeshConfig::default();
    let viewport_params = config.viewport.clone();
    let started = Instant::now();
    let scene = Scene::new(config)?;
    log::info!(
        "[init] mesh ready in {:.1}ms: {} surface nodes, {} surface edges, {} deep edges",
        started.elapsed().as_secs_f64() * 1000.0,
        scene.nodes(Layer::Surface).len(),
        scene.edges(Layer::Surface).len(),
        scene.edges(Layer::Deep).len()
    );

    let viewport = Rc::new(RefCell::new(dom::fit_canvas(
        &canvas,
        &ctx,
        dom::device_pixel_ratio(),
        &viewport_params,
    )));
    resize::wire_debounced_resize(
        canvas.clone(),
        ctx.clone(),
        viewport.clone(),
        viewport_params.clone(),
    )?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        renderer: FrameRenderer::new(),
        surface: render::CanvasSurface::new(ctx),
        canvas,
        viewport,
        viewport_params,
        frames: 0,
    }));
    let handle = frame::start_loop(frame_ctx);
    LOOP.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}
