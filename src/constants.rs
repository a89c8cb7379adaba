/// Page wiring for the web front-end.
///
/// The host page owns layout; these only have to agree with `index.html`.
pub const CANVAS_ID: &str = "terra_canvas";

// The canvas is painted edge to edge every frame, so an opaque context is fine.
pub const OPAQUE_CONTEXT: bool = true;

// Fixed height of the host region in CSS pixels.
pub const REGION_HEIGHT_PX: f64 = 620.0;

// Frames between debug-level stats lines.
pub const STATS_EVERY_FRAMES: u64 = 600;
