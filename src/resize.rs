use crate::dom;
use instant::Instant;
use mesh_core::{Debouncer, Viewport, ViewportParams};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A pending refit: our own ticket plus the browser's timeout id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RefitTimer {
    ticket: u32,
    timeout_id: i32,
}

/// Refit the canvas once resize events have been quiet for the debounce
/// delay. Each new event cancels the refit scheduled by the previous one.
pub fn wire_debounced_resize(
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Rc<RefCell<Viewport>>,
    params: ViewportParams,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let debounce: Rc<RefCell<Debouncer<RefitTimer>>> =
        Rc::new(RefCell::new(Debouncer::new(params.resize_debounce_ms)));
    let delay = params.resize_debounce_ms.round() as i32;

    let debounce_fire = debounce.clone();
    let on_timeout = Closure::wrap(Box::new(move |ticket: JsValue| {
        let Some(ticket) = ticket.as_f64().map(|t| t as u32) else {
            return;
        };
        if !debounce_fire
            .borrow_mut()
            .complete_if(|live| live.ticket == ticket)
        {
            return;
        }
        let fitted = dom::fit_canvas(&canvas, &ctx, dom::device_pixel_ratio(), &params);
        log::info!("[resize] refit to {}x{}", fitted.width, fitted.height);
        *viewport.borrow_mut() = fitted;
    }) as Box<dyn FnMut(JsValue)>);

    let epoch = Instant::now();
    let next_ticket = Cell::new(0u32);
    let on_resize = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let ticket = next_ticket.get().wrapping_add(1);
        next_ticket.set(ticket);
        let timeout_id = match w.set_timeout_with_callback_and_timeout_and_arguments_1(
            on_timeout.as_ref().unchecked_ref(),
            delay,
            &JsValue::from(ticket),
        ) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("[resize] set_timeout failed: {:?}", e);
                return;
            }
        };
        let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
        let superseded = debounce
            .borrow_mut()
            .schedule(now_ms, RefitTimer { ticket, timeout_id });
        if let Some(prev) = superseded {
            w.clear_timeout_with_handle(prev.timeout_id);
        }
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    on_resize.forget();
    Ok(())
}
