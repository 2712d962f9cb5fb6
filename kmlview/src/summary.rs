use kmlview_core::{Document, FeatureKind};
use kmlview_geometry::{format_area, resolve_geometry};
use std::fmt::Display;

/// Feature counts and total polygon area of a document.
///
/// `points` counts the same marker features [`kmlview_core::PointNavigator`] steps through.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentSummary {
	pub traces: usize,
	pub points: usize,
	pub annotations: usize,
	pub polygons: usize,
	pub overlays: usize,
	pub total_area_m2: f64,
}

pub fn summarize(document: &Document) -> DocumentSummary {
	let mut summary = DocumentSummary::default();
	for feature in &document.features {
		match feature.kind {
			FeatureKind::Line => summary.traces += 1,
			FeatureKind::Marker => {
				summary.points += 1;
				if feature.is_annotation {
					summary.annotations += 1;
				}
			}
			FeatureKind::Polygon => {
				summary.polygons += 1;
				if let Some(stats) = resolve_geometry(feature) {
					summary.total_area_m2 += stats.area_m2;
				}
			}
			FeatureKind::GroundOverlay | FeatureKind::ScreenOverlay => summary.overlays += 1,
			FeatureKind::Unknown => {}
		}
	}
	summary
}

impl Display for DocumentSummary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} trace(s), {} point(s) ({} annotation(s)), {} polygon(s), {} overlay(s), total area {}",
			self.traces,
			self.points,
			self.annotations,
			self.polygons,
			self.overlays,
			format_area(self.total_area_m2)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use kmlview_core::{Feature, Metadata, PointNavigator};
	use pretty_assertions::assert_eq;

	#[test]
	fn counts_features() {
		let mut annotation = Feature::new(0, FeatureKind::Marker, [1.0, 1.0]);
		annotation.is_annotation = true;
		let document = Document::new(
			vec![
				Feature::new(0, FeatureKind::Line, [[0.0, 0.0], [1.0, 1.0]]),
				Feature::new(0, FeatureKind::Marker, [0.0, 0.0]),
				annotation,
				Feature::new(0, FeatureKind::Polygon, [[0.0, 0.0], [0.0, 0.001], [0.001, 0.001], [0.001, 0.0]]),
				Feature::new(0, FeatureKind::Polygon, [[0.0, 0.0], [1.0, 1.0]]),
				Feature::new(0, FeatureKind::ScreenOverlay, [[0.0, 0.0]]),
				Feature::new(0, FeatureKind::Unknown, [2.0, 2.0]),
			],
			Metadata::default(),
		);

		let summary = summarize(&document);
		assert_eq!(summary.traces, 1);
		assert_eq!(summary.points, PointNavigator::new(&document).len());
		assert_eq!(summary.points, 2);
		assert_eq!(summary.annotations, 1);
		assert_eq!(summary.polygons, 2);
		assert_eq!(summary.overlays, 1);
		assert_eq!(
			summary.to_string(),
			"1 trace(s), 2 point(s) (1 annotation(s)), 2 polygon(s), 1 overlay(s), total area 12321 m²"
		);
	}

	#[test]
	fn empty_document() {
		assert_eq!(summarize(&Document::default()), DocumentSummary::default());
	}
}
