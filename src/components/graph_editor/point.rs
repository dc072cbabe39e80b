use std::cell::Cell;
use std::rc::{Rc, Weak};

use super::surface::Surface;

const HIGHLIGHT_COLOR: &str = "yellow";

/// A 2D coordinate. Equality is an exact coordinate match.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn draw(&self, surface: &mut impl Surface, style: PointStyle) {
		surface.draw_disc(*self, style.size, style.color);
		if style.outline {
			surface.draw_ring(*self, style.size * 0.6, HIGHLIGHT_COLOR, 2.0);
		}
		if style.fill {
			surface.draw_disc(*self, style.size * 0.4, HIGHLIGHT_COLOR);
		}
	}
}

/// Drawing options for a point marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
	/// Marker diameter.
	pub size: f64,
	pub color: &'static str,
	/// Draw a secondary ring inside the marker.
	pub outline: bool,
	/// Draw a secondary dot inside the marker.
	pub fill: bool,
}

impl Default for PointStyle {
	fn default() -> Self {
		Self {
			size: 18.0,
			color: "black",
			outline: false,
			fill: false,
		}
	}
}

/// Shared handle to a point stored in a graph.
///
/// Clones alias the same storage, so moving the point through one handle
/// is visible through every segment holding another.
#[derive(Clone, Debug)]
pub struct PointRef(Rc<Cell<Point>>);

impl PointRef {
	pub fn new(x: f64, y: f64) -> Self {
		Point::new(x, y).into()
	}

	pub fn get(&self) -> Point {
		self.0.get()
	}

	pub fn set(&self, point: Point) {
		self.0.set(point);
	}

	/// Coordinate equality with another handle.
	pub fn equals(&self, other: &PointRef) -> bool {
		self.get() == other.get()
	}

	/// Whether both handles refer to the same stored point.
	pub fn same(&self, other: &PointRef) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}

	pub fn downgrade(&self) -> WeakPointRef {
		WeakPointRef(Rc::downgrade(&self.0))
	}
}

impl From<Point> for PointRef {
	fn from(point: Point) -> Self {
		Self(Rc::new(Cell::new(point)))
	}
}

/// Non-owning handle to a stored point.
#[derive(Clone, Debug, Default)]
pub struct WeakPointRef(Weak<Cell<Point>>);

impl WeakPointRef {
	pub fn upgrade(&self) -> Option<PointRef> {
		self.0.upgrade().map(PointRef)
	}

	pub fn is(&self, point: &PointRef) -> bool {
		std::ptr::eq(self.0.as_ptr(), Rc::as_ptr(&point.0))
	}
}

#[cfg(test)]
mod tests {
	use super::super::surface::{DrawCall, RecordingSurface};
	use super::*;

	#[test]
	fn equality_is_exact() {
		let p = Point::new(1.5, -2.0);
		assert_eq!(p, p);
		assert_eq!(Point::new(1.5, -2.0), p);
		assert_ne!(Point::new(1.5, -2.000001), p);
	}

	#[test]
	fn clones_alias_the_same_point() {
		let a = PointRef::new(0.0, 0.0);
		let b = a.clone();
		b.set(Point::new(3.0, 4.0));
		assert_eq!(a.get(), Point::new(3.0, 4.0));
		assert!(a.same(&b));
	}

	#[test]
	fn equal_coordinates_are_not_the_same_point() {
		let a = PointRef::new(1.0, 1.0);
		let b = PointRef::new(1.0, 1.0);
		assert!(a.equals(&b));
		assert!(!a.same(&b));
	}

	#[test]
	fn weak_handle_dies_with_the_point() {
		let a = PointRef::new(1.0, 2.0);
		let weak = a.downgrade();
		assert!(weak.is(&a));
		assert_eq!(weak.upgrade().map(|p| p.get()), Some(Point::new(1.0, 2.0)));
		drop(a);
		assert!(weak.upgrade().is_none());
	}

	#[test]
	fn draw_emits_disc_then_decorations() {
		let mut surface = RecordingSurface::default();
		let p = Point::new(10.0, 20.0);
		p.draw(
			&mut surface,
			PointStyle {
				outline: true,
				fill: true,
				..Default::default()
			},
		);
		assert_eq!(
			surface.calls,
			vec![
				DrawCall::Disc {
					at: p,
					diameter: 18.0,
					color: "black"
				},
				DrawCall::Ring {
					at: p,
					diameter: 18.0 * 0.6,
					color: "yellow",
					line_width: 2.0
				},
				DrawCall::Disc {
					at: p,
					diameter: 18.0 * 0.4,
					color: "yellow"
				},
			]
		);
	}
}
