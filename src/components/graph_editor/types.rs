#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphPoint {
	pub x: f64,
	pub y: f64,
}

/// Connection between two entries of `GraphData::points`, by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphLink {
	pub source: usize,
	pub target: usize,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub points: Vec<GraphPoint>,
	pub links: Vec<GraphLink>,
}
