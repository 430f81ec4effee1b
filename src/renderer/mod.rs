//! 2D rendering module
//!
//! Drawing goes through the [`Surface`] trait so the scene can be rendered
//! to a browser canvas or recorded in tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{palette, render};

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Immediate-mode drawing surface with canvas-like state
pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill_color(&mut self, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
