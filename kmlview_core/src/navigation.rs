//! Stepping through the marker points of a document.
//!
//! Points are the markers of the document ordered by the parser's point index. The
//! navigator keeps a current selection and wraps around at both ends.

use crate::document::{Document, Feature, FeatureKind};
use itertools::Itertools;

pub const ANNOTATION_COLOR: &str = "#ff6b6b";
pub const MAIN_POINT_COLOR: &str = "#4ecdc4";

/// How a point is labelled in the point list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointBadge {
	Annotation,
	MainPoint,
}

impl PointBadge {
	pub fn of(feature: &Feature) -> Self {
		if feature.is_annotation { PointBadge::Annotation } else { PointBadge::MainPoint }
	}

	pub fn label(&self) -> &str {
		match self {
			PointBadge::Annotation => "Annotation",
			PointBadge::MainPoint => "Point principal",
		}
	}

	pub fn color(&self) -> &str {
		match self {
			PointBadge::Annotation => ANNOTATION_COLOR,
			PointBadge::MainPoint => MAIN_POINT_COLOR,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointNavigator {
	point_ids: Vec<usize>,
	current: Option<usize>,
}

impl PointNavigator {
	pub fn new(document: &Document) -> Self {
		let point_ids = document
			.features
			.iter()
			.filter(|f| f.kind == FeatureKind::Marker)
			.sorted_by_key(|f| (f.point_index.unwrap_or(usize::MAX), f.id))
			.map(|f| f.id)
			.collect();
		PointNavigator {
			point_ids,
			current: None,
		}
	}

	pub fn len(&self) -> usize {
		self.point_ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.point_ids.is_empty()
	}

	/// Feature ids of all points, in navigation order.
	pub fn point_ids(&self) -> &[usize] {
		&self.point_ids
	}

	pub fn current_index(&self) -> Option<usize> {
		self.current
	}

	/// Feature id of the selected point.
	pub fn current_feature(&self) -> Option<usize> {
		self.current.map(|index| self.point_ids[index])
	}

	/// Selects a point by position. Out-of-range positions are ignored.
	pub fn select(&mut self, index: usize) -> Option<usize> {
		if index < self.point_ids.len() {
			self.current = Some(index);
		}
		self.current_feature()
	}

	pub fn next(&mut self) -> Option<usize> {
		if self.point_ids.is_empty() {
			return None;
		}
		let index = self.current.map_or(0, |i| (i + 1) % self.point_ids.len());
		self.select(index)
	}

	pub fn previous(&mut self) -> Option<usize> {
		if self.point_ids.is_empty() {
			return None;
		}
		let index = match self.current {
			None | Some(0) => self.point_ids.len() - 1,
			Some(i) => i - 1,
		};
		self.select(index)
	}

	/// `Point 3/12` for the current selection.
	pub fn status(&self) -> Option<String> {
		self.current.map(|index| format!("Point {}/{}", index + 1, self.point_ids.len()))
	}
}
