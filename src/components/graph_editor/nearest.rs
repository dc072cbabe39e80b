use super::point::{Point, PointRef};

pub fn distance(a: Point, b: Point) -> f64 {
	(a.x - b.x).hypot(a.y - b.y)
}

/// Closest point to `loc` strictly within `threshold`. Ties keep the
/// earliest candidate.
pub fn find_nearest<'a>(loc: Point, points: &'a [PointRef], threshold: f64) -> Option<&'a PointRef> {
	let mut nearest = None;
	let mut min_dist = threshold;
	for point in points {
		let dist = distance(point.get(), loc);
		if dist < min_dist {
			min_dist = dist;
			nearest = Some(point);
		}
	}
	nearest
}
