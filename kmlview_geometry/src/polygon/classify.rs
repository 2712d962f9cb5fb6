use geo::{Coord, LineString};
use kmlview_core::CoordinateTree;

/// Minimum number of vertices of a usable ring.
pub const MIN_RING_POINTS: usize = 3;

/// The shape a polygon feature is drawn as.
///
/// Positions keep the parser's `[lat, lng]` order: `x` is the latitude, `y` the longitude.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonShape {
	/// A single ring.
	Simple(LineString<f64>),
	/// An outer boundary with holes.
	Holed {
		outer: LineString<f64>,
		holes: Vec<LineString<f64>>,
	},
	/// Several rings drawn together.
	MultiRing(Vec<LineString<f64>>),
}

impl PolygonShape {
	pub fn rings(&self) -> Vec<&LineString<f64>> {
		match self {
			PolygonShape::Simple(ring) => vec![ring],
			PolygonShape::Holed { outer, holes } => std::iter::once(outer).chain(holes).collect(),
			PolygonShape::MultiRing(rings) => rings.iter().collect(),
		}
	}
}

/// A classified polygon payload.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedPolygon {
	pub shape: PolygonShape,
	/// Ring used for area and perimeter. Holes never count.
	pub stats_ring: Option<LineString<f64>>,
}

/// Reads a list of positions. Any entry that is not a position makes the whole ring invalid.
pub fn parse_ring(node: &CoordinateTree) -> Option<LineString<f64>> {
	node
		.as_list()?
		.iter()
		.map(|p| p.as_position().map(|[x, y]| Coord { x, y }))
		.collect::<Option<Vec<_>>>()
		.map(LineString::new)
}

fn parse_valid_ring(node: &CoordinateTree) -> Option<LineString<f64>> {
	parse_ring(node).filter(|ring| ring.0.len() >= MIN_RING_POINTS)
}

/// The ring statistics are computed on: the first entry if the payload is nested one level
/// deeper than a ring, otherwise the payload itself.
pub fn statistics_ring(coordinates: &CoordinateTree) -> Option<LineString<f64>> {
	let first = coordinates.as_list()?.first()?;
	if first.starts_with_list() {
		parse_valid_ring(first)
	} else {
		parse_valid_ring(coordinates)
	}
}

/// Classifies a polygon payload as a simple ring, a ring with holes, or a set of rings.
///
/// Returns `None` for anything that cannot be drawn: empty payloads, rings with fewer than
/// three points, and positions that are not pairs of numbers.
///
/// In the multi-ring fallback every ring with at least three points is drawn, while the
/// statistics come from the unfiltered payload through [`statistics_ring`]. For payloads
/// holding several disjoint outer rings this measures at most one of them, or none at all.
pub fn classify_polygon(coordinates: &CoordinateTree) -> Option<ClassifiedPolygon> {
	let entries = coordinates.as_list()?;
	let first = entries.first()?;

	if first.starts_with_list() {
		let outer = parse_valid_ring(first)?;
		let holes = entries[1..].iter().map(parse_ring).collect::<Option<Vec<_>>>()?;
		return Some(ClassifiedPolygon {
			stats_ring: Some(outer.clone()),
			shape: PolygonShape::Holed { outer, holes },
		});
	}

	if first.starts_with_number() {
		let ring = parse_valid_ring(coordinates)?;
		return Some(ClassifiedPolygon {
			stats_ring: Some(ring.clone()),
			shape: PolygonShape::Simple(ring),
		});
	}

	let rings = entries
		.iter()
		.filter(|entry| entry.len() >= MIN_RING_POINTS)
		.map(parse_ring)
		.collect::<Option<Vec<_>>>()?;
	if rings.is_empty() {
		return None;
	}
	Some(ClassifiedPolygon {
		shape: PolygonShape::MultiRing(rings),
		stats_ring: statistics_ring(coordinates),
	})
}
