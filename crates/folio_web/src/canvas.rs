//! 2D canvas as a [`Surface`].

use std::f64::consts::TAU;

use folio_core::{Color, Rect, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{WebError, WebResult};

/// A canvas element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquires the 2D context of `canvas`.
    pub fn new(canvas: HtmlCanvasElement) -> WebResult<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(WebError::Missing("2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::Missing("2d context"))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn set_size(&mut self, width: f64, height: f64) {
        // Canvas dimensions are whole pixels; negative or NaN become 0.
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self, region: Rect) {
        self.ctx
            .clear_rect(region.x, region.y, region.width, region.height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.ctx.begin_path();
        // Only fails for a negative radius.
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill();
        }
    }
}
