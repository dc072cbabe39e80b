use super::point::Point;

/// Drawing target for graph primitives.
pub trait Surface {
	fn draw_disc(&mut self, at: Point, diameter: f64, color: &str);
	fn draw_ring(&mut self, at: Point, diameter: f64, color: &str, line_width: f64);
	/// Strokes a line. An empty `dash` draws it solid; the dash pattern
	/// must not carry over to later calls.
	fn draw_line(&mut self, from: Point, to: Point, width: f64, color: &str, dash: &[f64]);
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	Disc {
		at: Point,
		diameter: f64,
		color: &'static str,
	},
	Ring {
		at: Point,
		diameter: f64,
		color: &'static str,
		line_width: f64,
	},
	Line {
		from: Point,
		to: Point,
		width: f64,
		color: &'static str,
		dash: Vec<f64>,
	},
}

/// Records draw calls in order so tests can compare them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl RecordingSurface {
	// Colors are interned so DrawCall can stay comparable with literals.
	fn color(color: &str) -> &'static str {
		match color {
			"black" => "black",
			"yellow" => "yellow",
			other => Box::leak(other.to_owned().into_boxed_str()),
		}
	}
}

#[cfg(test)]
impl Surface for RecordingSurface {
	fn draw_disc(&mut self, at: Point, diameter: f64, color: &str) {
		self.calls.push(DrawCall::Disc {
			at,
			diameter,
			color: Self::color(color),
		});
	}

	fn draw_ring(&mut self, at: Point, diameter: f64, color: &str, line_width: f64) {
		self.calls.push(DrawCall::Ring {
			at,
			diameter,
			color: Self::color(color),
			line_width,
		});
	}

	fn draw_line(&mut self, from: Point, to: Point, width: f64, color: &str, dash: &[f64]) {
		self.calls.push(DrawCall::Line {
			from,
			to,
			width,
			color: Self::color(color),
			dash: dash.to_vec(),
		});
	}
}
