use log::{debug, info};

use super::graph::Graph;
use super::nearest::find_nearest;
use super::point::{Point, PointRef, PointStyle, WeakPointRef};
use super::segment::{Segment, SegmentStyle};
use super::surface::Surface;

/// Pointer distance, in pixels, within which a point counts as hovered.
pub const HOVER_THRESHOLD: f64 = 15.0;

const PREVIEW_DASH: &[f64] = &[3.0, 3.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	Primary,
	Secondary,
}

impl PointerButton {
	/// Maps a DOM `MouseEvent.button` value.
	pub fn from_dom(button: i16) -> Option<Self> {
		match button {
			0 => Some(Self::Primary),
			2 => Some(Self::Secondary),
			_ => None,
		}
	}
}

/// Turns pointer events into edits of the owned graph.
///
/// A primary press places a point on empty space, or picks the hovered
/// point and connects it to the current selection. A secondary press
/// clears the selection first and only then deletes the hovered point.
pub struct GraphEditor {
	pub graph: Graph,
	hover_threshold: f64,
	hovered: Option<WeakPointRef>,
	selected: Option<WeakPointRef>,
	dragging: bool,
	pointer: Option<Point>,
	pub width: f64,
	pub height: f64,
}

impl GraphEditor {
	pub fn new(graph: Graph, width: f64, height: f64) -> Self {
		Self {
			graph,
			hover_threshold: HOVER_THRESHOLD,
			hovered: None,
			selected: None,
			dragging: false,
			pointer: None,
			width,
			height,
		}
	}

	pub fn with_hover_threshold(mut self, threshold: f64) -> Self {
		self.hover_threshold = threshold;
		self
	}

	pub fn hovered(&self) -> Option<PointRef> {
		self.hovered.as_ref().and_then(WeakPointRef::upgrade)
	}

	pub fn selected(&self) -> Option<PointRef> {
		self.selected.as_ref().and_then(WeakPointRef::upgrade)
	}

	#[cfg(test)]
	pub fn is_dragging(&self) -> bool {
		self.dragging
	}

	pub fn pointer(&self) -> Option<Point> {
		self.pointer
	}

	fn refresh_hover(&mut self, loc: Point) {
		self.pointer = Some(loc);
		self.hovered =
			find_nearest(loc, self.graph.points(), self.hover_threshold).map(PointRef::downgrade);
	}

	pub fn pointer_move(&mut self, loc: Point) {
		self.refresh_hover(loc);
		if self.dragging {
			if let Some(selected) = self.selected() {
				selected.set(loc);
			}
		}
	}

	pub fn pointer_down(&mut self, button: PointerButton, loc: Point) {
		self.refresh_hover(loc);
		match button {
			PointerButton::Primary => self.primary_down(loc),
			PointerButton::Secondary => self.secondary_down(),
		}
	}

	fn primary_down(&mut self, loc: Point) {
		if let Some(hovered) = self.hovered() {
			self.select(&hovered);
			self.dragging = true;
			return;
		}

		let point = PointRef::from(loc);
		self.graph.add_point(point.clone());
		debug!("added point {loc:?}");
		self.selected = Some(point.downgrade());
		self.hovered = Some(point.downgrade());
	}

	fn select(&mut self, point: &PointRef) {
		if let Some(selected) = self.selected() {
			if self.graph.try_add_segment(Segment::new(selected.clone(), point.clone())) {
				debug!("connected {:?} to {:?}", selected.get(), point.get());
			}
		}
		self.selected = Some(point.downgrade());
	}

	fn secondary_down(&mut self) {
		// A handle whose point is already gone is not a selection.
		if self.selected().is_some() {
			self.selected = None;
			debug!("selection cleared");
			return;
		}
		if let Some(hovered) = self.hovered() {
			self.remove_point(&hovered);
		}
	}

	fn remove_point(&mut self, point: &PointRef) {
		self.graph.remove_point(point);
		self.hovered = None;
		if self.selected.as_ref().is_some_and(|s| s.is(point)) {
			self.selected = None;
		}
	}

	pub fn pointer_up(&mut self) {
		self.dragging = false;
	}

	/// The pointer left the surface: stop dragging and drop the hover.
	pub fn pointer_leave(&mut self) {
		self.dragging = false;
		self.hovered = None;
	}

	/// Empties the graph and resets all pointer state.
	pub fn dispose(&mut self) {
		self.graph.clear();
		self.hovered = None;
		self.selected = None;
		self.dragging = false;
		info!("graph cleared");
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Draws the graph, the hover highlight, the pending connection and the
	/// selection outline, in that order.
	pub fn display(&self, surface: &mut impl Surface) {
		self.graph.draw(surface);

		let hovered = self.hovered();
		if let Some(hovered) = &hovered {
			hovered.get().draw(
				surface,
				PointStyle {
					fill: true,
					..Default::default()
				},
			);
		}

		if let Some(selected) = self.selected() {
			let intent = hovered.map(|p| p.get()).or(self.pointer());
			if let Some(intent) = intent {
				Segment::new(selected.clone(), intent.into()).draw(
					surface,
					SegmentStyle {
						dash: PREVIEW_DASH,
						..Default::default()
					},
				);
			}
			selected.get().draw(
				surface,
				PointStyle {
					outline: true,
					..Default::default()
				},
			);
		}
	}
}
