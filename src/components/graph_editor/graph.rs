use log::debug;

use super::point::{Point, PointRef, PointStyle};
use super::segment::{Segment, SegmentStyle};
use super::surface::Surface;
use super::types::GraphData;

/// Points and the segments between them, in insertion order.
///
/// `try_add_*` keep points and segments unique; the plain `add_*` calls
/// append unconditionally and leave uniqueness to the caller.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	points: Vec<PointRef>,
	segments: Vec<Segment>,
}

impl Graph {
	pub fn new() -> Self {
		Self::default()
	}

	/// Takes the collections as given, without checking them.
	#[cfg(test)]
	pub fn with(points: Vec<PointRef>, segments: Vec<Segment>) -> Self {
		Self { points, segments }
	}

	/// Builds a graph from external data. Duplicate points and links that
	/// are out of range, degenerate or repeated are skipped.
	pub fn from_data(data: &GraphData) -> Self {
		let mut graph = Self::new();
		let mut stored = Vec::with_capacity(data.points.len());
		for p in &data.points {
			let point = Point::new(p.x, p.y);
			if let Some(existing) = graph.contains_point(&point) {
				stored.push(existing.clone());
			} else {
				let point = PointRef::from(point);
				graph.add_point(point.clone());
				stored.push(point);
			}
		}

		for link in &data.links {
			if let (Some(p1), Some(p2)) = (stored.get(link.source), stored.get(link.target)) {
				graph.try_add_segment(Segment::new(p1.clone(), p2.clone()));
			}
		}
		graph
	}

	pub fn points(&self) -> &[PointRef] {
		&self.points
	}

	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	pub fn add_point(&mut self, point: PointRef) {
		self.points.push(point);
	}

	pub fn contains_point(&self, point: &Point) -> Option<&PointRef> {
		self.points.iter().find(|p| p.get() == *point)
	}

	pub fn try_add_point(&mut self, point: PointRef) -> bool {
		if self.contains_point(&point.get()).is_some() {
			return false;
		}
		self.add_point(point);
		true
	}

	/// Removes the stored point and every segment attached to it.
	pub fn remove_point(&mut self, point: &PointRef) -> bool {
		let Some(idx) = self.points.iter().position(|p| p.same(point)) else {
			return false;
		};
		self.points.remove(idx);
		let detached = self.segments_with_point(point).count();
		self.segments.retain(|s| !s.references(point));
		debug!("removed point {:?} and {detached} segment(s)", point.get());
		true
	}

	pub fn add_segment(&mut self, segment: Segment) {
		self.segments.push(segment);
	}

	pub fn contains_segment(&self, segment: &Segment) -> Option<&Segment> {
		self.segments.iter().find(|s| *s == segment)
	}

	pub fn try_add_segment(&mut self, segment: Segment) -> bool {
		if segment.is_degenerate() || self.contains_segment(&segment).is_some() {
			return false;
		}
		self.add_segment(segment);
		true
	}

	/// Removes the first segment equal to `segment`.
	pub fn remove_segment(&mut self, segment: &Segment) -> bool {
		match self.segments.iter().position(|s| s == segment) {
			Some(idx) => {
				self.segments.remove(idx);
				true
			}
			None => false,
		}
	}

	pub fn segments_with_point<'a>(&'a self, point: &'a PointRef) -> impl Iterator<Item = &'a Segment> {
		self.segments.iter().filter(move |s| s.references(point))
	}

	pub fn clear(&mut self) {
		self.points.clear();
		self.segments.clear();
	}

	/// Segments first so point markers sit on top.
	pub fn draw(&self, surface: &mut impl Surface) {
		for segment in &self.segments {
			segment.draw(surface, SegmentStyle::default());
		}
		for point in &self.points {
			point.get().draw(surface, PointStyle::default());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::surface::{DrawCall, RecordingSurface};
	use super::super::types::{GraphLink, GraphPoint};
	use super::*;

	fn two_points() -> (Graph, PointRef, PointRef) {
		let a = PointRef::new(0.0, 0.0);
		let b = PointRef::new(10.0, 0.0);
		let graph = Graph::with(vec![a.clone(), b.clone()], vec![]);
		(graph, a, b)
	}

	#[test]
	fn try_add_point_rejects_duplicates() {
		let mut graph = Graph::new();
		assert!(graph.try_add_point(PointRef::new(0.0, 0.0)));
		assert_eq!(graph.points().len(), 1);
		assert!(!graph.try_add_point(PointRef::new(0.0, 0.0)));
		assert_eq!(graph.points().len(), 1);
	}

	#[test]
	fn add_point_is_unconditional() {
		let mut graph = Graph::new();
		graph.add_point(PointRef::new(1.0, 1.0));
		graph.add_point(PointRef::new(1.0, 1.0));
		assert_eq!(graph.points().len(), 2);
	}

	#[test]
	fn contains_point_returns_first_match() {
		let first = PointRef::new(2.0, 3.0);
		let graph = Graph::with(vec![first.clone(), PointRef::new(2.0, 3.0)], vec![]);
		assert!(graph.contains_point(&Point::new(2.0, 3.0)).is_some_and(|p| p.same(&first)));
		assert!(graph.contains_point(&Point::new(3.0, 2.0)).is_none());
	}

	#[test]
	fn try_add_segment_rejects_reversed_duplicate() {
		let (mut graph, a, b) = two_points();
		assert!(graph.try_add_segment(Segment::new(a.clone(), b.clone())));
		assert_eq!(graph.segments().len(), 1);
		assert!(!graph.try_add_segment(Segment::new(b, a)));
		assert_eq!(graph.segments().len(), 1);
	}

	#[test]
	fn try_add_segment_rejects_degenerate() {
		let (mut graph, a, _) = two_points();
		assert!(!graph.try_add_segment(Segment::new(a.clone(), a)));
		assert!(graph.segments().is_empty());
	}

	#[test]
	fn try_add_segment_rejects_coincident_endpoints() {
		let (mut graph, a, _) = two_points();
		let twin = PointRef::new(0.0, 0.0);
		assert!(!graph.try_add_segment(Segment::new(a, twin)));
	}

	#[test]
	fn remove_segment_removes_first_match() {
		let (mut graph, a, b) = two_points();
		graph.add_segment(Segment::new(a.clone(), b.clone()));
		assert!(graph.remove_segment(&Segment::new(b.clone(), a.clone())));
		assert!(graph.segments().is_empty());
		assert!(!graph.remove_segment(&Segment::new(a, b)));
	}

	#[test]
	fn remove_point_cascades_to_segments() {
		let (mut graph, a, b) = two_points();
		let c = PointRef::new(0.0, 10.0);
		graph.add_point(c.clone());
		graph.try_add_segment(Segment::new(a.clone(), b.clone()));
		graph.try_add_segment(Segment::new(a.clone(), c.clone()));
		graph.try_add_segment(Segment::new(b.clone(), c.clone()));
		assert_eq!(graph.segments_with_point(&a).count(), 2);

		assert!(graph.remove_point(&a));
		assert_eq!(graph.points().len(), 2);
		assert_eq!(graph.segments().len(), 1);
		assert_eq!(graph.segments()[0], Segment::new(b, c));
		assert_eq!(graph.segments_with_point(&a).count(), 0);
	}

	#[test]
	fn remove_point_ignores_non_members() {
		let (mut graph, _, _) = two_points();
		// Same coordinates, different stored point.
		assert!(!graph.remove_point(&PointRef::new(0.0, 0.0)));
		assert_eq!(graph.points().len(), 2);
	}

	#[test]
	fn clear_empties_everything() {
		let (mut graph, a, b) = two_points();
		graph.try_add_segment(Segment::new(a, b));
		graph.clear();
		assert!(graph.points().is_empty());
		assert!(graph.segments().is_empty());
	}

	#[test]
	fn from_data_skips_invalid_links() {
		let data = GraphData {
			points: vec![
				GraphPoint { x: 0.0, y: 0.0 },
				GraphPoint { x: 10.0, y: 0.0 },
				GraphPoint { x: 0.0, y: 0.0 },
			],
			links: vec![
				GraphLink { source: 0, target: 1 },
				GraphLink { source: 1, target: 0 },
				GraphLink { source: 0, target: 2 },
				GraphLink { source: 1, target: 7 },
			],
		};
		let graph = Graph::from_data(&data);
		assert_eq!(graph.points().len(), 2);
		assert_eq!(graph.segments().len(), 1);
	}

	#[test]
	fn draws_segments_before_points() {
		let (mut graph, a, b) = two_points();
		graph.try_add_segment(Segment::new(a, b));
		let mut surface = RecordingSurface::default();
		graph.draw(&mut surface);

		assert_eq!(surface.calls.len(), 3);
		assert!(matches!(surface.calls[0], DrawCall::Line { .. }));
		assert!(matches!(surface.calls[1], DrawCall::Disc { at, .. } if at == Point::new(0.0, 0.0)));
		assert!(matches!(surface.calls[2], DrawCall::Disc { at, .. } if at == Point::new(10.0, 0.0)));
	}
}
