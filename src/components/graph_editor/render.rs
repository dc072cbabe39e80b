use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::editor::GraphEditor;
use super::point::Point;
use super::surface::Surface;

const BACKGROUND: &str = "#f5f5f0";

pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Surface for CanvasSurface<'_> {
	fn draw_disc(&mut self, at: Point, diameter: f64, color: &str) {
		let ctx = self.ctx;
		ctx.begin_path();
		ctx.set_fill_style_str(color);
		let _ = ctx.arc(at.x, at.y, diameter / 2.0, 0.0, 2.0 * PI);
		ctx.fill();
	}

	fn draw_ring(&mut self, at: Point, diameter: f64, color: &str, line_width: f64) {
		let ctx = self.ctx;
		ctx.begin_path();
		ctx.set_line_width(line_width);
		ctx.set_stroke_style_str(color);
		let _ = ctx.arc(at.x, at.y, diameter / 2.0, 0.0, 2.0 * PI);
		ctx.stroke();
	}

	fn draw_line(&mut self, from: Point, to: Point, width: f64, color: &str, dash: &[f64]) {
		let ctx = self.ctx;
		ctx.begin_path();
		ctx.set_line_width(width);
		ctx.set_stroke_style_str(color);
		let pattern: js_sys::Array = dash.iter().map(|d| JsValue::from_f64(*d)).collect();
		let _ = ctx.set_line_dash(&pattern);
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
		// The context keeps its dash pattern between paths.
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}
}

pub fn render(editor: &GraphEditor, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, editor.width, editor.height);
	editor.display(&mut CanvasSurface::new(ctx));
}
