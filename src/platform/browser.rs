//! Browser lookups
//!
//! Every DOM call here can fail at runtime; failures surface as `anyhow`
//! errors for the entry point to log.

use anyhow::{Result, anyhow};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

/// Element ids and attributes the page must provide
mod html {
    pub const CANVAS_ID: &str = "gameCanvas";
    pub const CONTEXT_2D: &str = "2d";
    pub const TUNING_ATTR: &str = "data-tuning";
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("Window not found"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("No Document found"))
}

pub fn canvas() -> Result<HtmlCanvasElement> {
    document()?
        .get_element_by_id(html::CANVAS_ID)
        .ok_or_else(|| anyhow!("No canvas element with id '{}'", html::CANVAS_ID))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|element| anyhow!("Error converting {:#?} to HtmlCanvasElement", element))
}

pub fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context(html::CONTEXT_2D)
        .map_err(|js_value| anyhow!("Error getting context: {:#?}", js_value))?
        .ok_or_else(|| anyhow!("No 2d context found"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|element| {
            anyhow!(
                "Error converting {:#?} to CanvasRenderingContext2d",
                element
            )
        })
}

/// Tuning JSON embedded in the canvas element, if any
pub fn tuning_attribute(canvas: &HtmlCanvasElement) -> Option<String> {
    canvas.get_attribute(html::TUNING_ATTR)
}
