use glam::DVec2;
use js_sys::{Object, Reflect};
use mesh_core::{sanitize_dpr, Viewport, ViewportParams};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| sanitize_dpr(w.device_pixel_ratio()))
        .unwrap_or(1.0)
}

pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{id} is not a canvas: {:?}", e)))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
    opaque: bool,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::from_bool(!opaque))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas
        .get_context_with_context_options("2d", &options)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn rect_size(el: &web::Element) -> DVec2 {
    let rect = el.get_bounding_client_rect();
    DVec2::new(rect.width(), rect.height())
}

/// Size the backing store to the container's CSS box times `dpr` and scale
/// the context so drawing stays in CSS pixels. Resizing the backing store
/// resets context state, so the transform is reapplied here.
pub fn fit_canvas(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    dpr: f64,
    params: &ViewportParams,
) -> Viewport {
    let container = canvas.parent_element().map(|p| rect_size(&p));
    let viewport = Viewport::fit_to_host(container, rect_size(canvas), dpr, params);
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    _ = ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0);
    log::debug!(
        "[dom] canvas {}x{} css @{}x -> {}x{} px",
        viewport.width,
        viewport.height,
        viewport.dpr,
        w_px,
        h_px
    );
    viewport
}

/// Give an unstyled canvas the fixed region height so its CSS box is not empty.
pub fn ensure_region_height(canvas: &web::HtmlCanvasElement, height_px: f64) {
    if canvas.get_bounding_client_rect().height() <= 0.0 {
        _ = canvas
            .style()
            .set_property("height", &format!("{height_px}px"));
    }
}
