//! Browser canvas backend

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{Surface, TextAlign};

/// [`Surface`] over a 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(cx, cy, radius, 0.0, TAU) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if let Err(e) = self.ctx.fill_text(text, x, y) {
            log::warn!("Canvas fill_text failed: {:?}", e);
        }
    }
}
