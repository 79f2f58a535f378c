//! 2D canvas drawing surface

use game_core::Surface;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Draws game frames onto a `<canvas>` 2d context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), JsValue> {
        let segments: js_sys::Array = segments.iter().map(|s| JsValue::from_f64(*s)).collect();
        self.ctx.set_line_dash(&segments)
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), JsValue> {
        self.ctx.arc(x, y, radius, start_angle, end_angle)
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.fill_text(text, x, y)
    }
}
