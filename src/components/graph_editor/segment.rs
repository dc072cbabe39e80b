use super::point::{Point, PointRef};
use super::surface::Surface;

/// Undirected edge between two stored points.
#[derive(Clone, Debug)]
pub struct Segment {
	pub p1: PointRef,
	pub p2: PointRef,
}

impl Segment {
	pub fn new(p1: PointRef, p2: PointRef) -> Self {
		Self { p1, p2 }
	}

	/// Whether `point` matches either endpoint by coordinates.
	pub fn includes(&self, point: &Point) -> bool {
		self.p1.get() == *point || self.p2.get() == *point
	}

	/// Whether either endpoint is the stored point `point`.
	pub fn references(&self, point: &PointRef) -> bool {
		self.p1.same(point) || self.p2.same(point)
	}

	pub fn is_degenerate(&self) -> bool {
		self.p1.equals(&self.p2)
	}

	pub fn draw(&self, surface: &mut impl Surface, style: SegmentStyle) {
		surface.draw_line(
			self.p1.get(),
			self.p2.get(),
			style.width,
			style.color,
			style.dash,
		);
	}
}

/// Order-independent: `(a, b) == (b, a)`. Both sides must cover each
/// other, so a degenerate `(a, a)` never equals `(a, b)`.
impl PartialEq for Segment {
	fn eq(&self, other: &Self) -> bool {
		let (a, b) = (other.p1.get(), other.p2.get());
		self.includes(&a)
			&& self.includes(&b)
			&& other.includes(&self.p1.get())
			&& other.includes(&self.p2.get())
	}
}

/// Drawing options for a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentStyle {
	pub width: f64,
	pub color: &'static str,
	/// Alternating dash and gap lengths; empty draws a solid line.
	pub dash: &'static [f64],
}

impl Default for SegmentStyle {
	fn default() -> Self {
		Self {
			width: 2.0,
			color: "black",
			dash: &[],
		}
	}
}
