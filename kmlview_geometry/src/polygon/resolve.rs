use super::{PolygonShape, classify_polygon};
use crate::{
	format::{format_area, format_distance},
	math::{area_m2, perimeter_m},
};
use kmlview_core::{Feature, FeatureKind};
use log::debug;

/// Approximate area and perimeter of a polygon's statistics ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonStats {
	pub area_m2: f64,
	pub perimeter_m: f64,
}

impl PolygonStats {
	pub fn formatted_area(&self) -> String {
		format_area(self.area_m2)
	}

	pub fn formatted_perimeter(&self) -> String {
		format_distance(self.perimeter_m)
	}
}

/// What a polygon feature resolves to: the shape to draw and, if measurable, its statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPolygon {
	pub shape: PolygonShape,
	pub stats: Option<PolygonStats>,
}

/// Resolves the drawable shape of a polygon feature.
///
/// Returns `None` for non-polygon features and for coordinates that do not form a usable
/// polygon. Such features are to be left out of drawing and statistics alike.
pub fn resolve_polygon(feature: &Feature) -> Option<ResolvedPolygon> {
	if feature.kind != FeatureKind::Polygon {
		return None;
	}
	let Some(classified) = classify_polygon(&feature.coordinates) else {
		debug!("feature {} has no usable polygon geometry", feature.id);
		return None;
	};
	Some(ResolvedPolygon {
		shape: classified.shape,
		stats: classified.stats_ring.map(|ring| PolygonStats {
			area_m2: area_m2(&ring),
			perimeter_m: perimeter_m(&ring),
		}),
	})
}

/// Area and perimeter of a polygon feature, `None` if it has none.
pub fn resolve_geometry(feature: &Feature) -> Option<PolygonStats> {
	resolve_polygon(feature)?.stats
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	fn polygon(coordinates: &str) -> Feature {
		Feature::new(0, FeatureKind::Polygon, serde_json::from_str::<kmlview_core::CoordinateTree>(coordinates).unwrap())
	}

	#[test]
	fn small_square() {
		let feature = polygon("[[0, 0], [0, 0.001], [0.001, 0.001], [0.001, 0]]");
		let stats = resolve_geometry(&feature).unwrap();
		assert_relative_eq!(stats.area_m2, (0.001f64 * 111_000.0).powi(2), max_relative = 1e-9);
		assert_relative_eq!(stats.perimeter_m, 4.0 * 0.001 * 111_000.0, max_relative = 1e-9);
		assert_eq!(stats.formatted_area(), "12321 m²");
		assert_eq!(stats.formatted_perimeter(), "444 m");
	}

	#[test]
	fn holes_do_not_reduce_area() {
		let plain = polygon("[[[0, 0], [0, 0.01], [0.01, 0.01], [0.01, 0]]]");
		let holed = polygon("[[[0, 0], [0, 0.01], [0.01, 0.01], [0.01, 0]], [[0.002, 0.002], [0.002, 0.004], [0.004, 0.004]]]");
		assert_eq!(resolve_geometry(&plain), resolve_geometry(&holed));
	}

	#[test]
	fn large_polygon_formats_in_km() {
		let stats = resolve_geometry(&polygon("[[0, 0], [0, 1], [1, 1], [1, 0]]")).unwrap();
		assert_eq!(stats.formatted_area(), "12321 km²");
		assert_eq!(stats.formatted_perimeter(), "444.00 km");
	}

	#[rstest]
	#[case("[[1, 2], [3, 4]]")]
	#[case("[]")]
	#[case("[[1, 2], [3, 4], \"x\"]")]
	fn no_polygon(#[case] coordinates: &str) {
		assert_eq!(resolve_polygon(&polygon(coordinates)), None);
		assert_eq!(resolve_geometry(&polygon(coordinates)), None);
	}

	#[test]
	fn other_kinds_are_not_polygons() {
		let line = Feature::new(0, FeatureKind::Line, [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
		assert_eq!(resolve_polygon(&line), None);
	}

	#[test]
	fn fallback_renders_without_statistics() {
		let resolved = resolve_polygon(&polygon("[[], [[0, 0], [0, 1], [1, 1]]]")).unwrap();
		assert!(matches!(resolved.shape, PolygonShape::MultiRing(_)));
		assert_eq!(resolved.stats, None);
	}
}
