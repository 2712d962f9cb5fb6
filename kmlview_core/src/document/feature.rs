use super::CoordinateTree;
use std::fmt::Display;

/// The geometric kind of a feature.
///
/// The parser emits a handful of type strings; polylines, tracks and multi-tracks are all
/// drawn and grouped the same way and collapse into `Line`. Type strings that are not
/// recognized become `Unknown`, which is styled and categorized like a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKind {
	Marker,
	Line,
	Polygon,
	GroundOverlay,
	ScreenOverlay,
	Unknown,
}

impl FeatureKind {
	pub fn as_str(&self) -> &str {
		match self {
			FeatureKind::Marker => "marker",
			FeatureKind::Line => "line",
			FeatureKind::Polygon => "polygon",
			FeatureKind::GroundOverlay => "ground_overlay",
			FeatureKind::ScreenOverlay => "screen_overlay",
			FeatureKind::Unknown => "unknown",
		}
	}

	/// Maps a parser type string onto a kind. Never fails.
	pub fn parse_str(value: &str) -> Self {
		match value.trim().to_lowercase().as_str() {
			"marker" | "point" => FeatureKind::Marker,
			"polyline" | "line" | "linestring" | "track" | "multitrack" => FeatureKind::Line,
			"polygon" => FeatureKind::Polygon,
			"ground_overlay" | "groundoverlay" => FeatureKind::GroundOverlay,
			"screen_overlay" | "screenoverlay" => FeatureKind::ScreenOverlay,
			_ => FeatureKind::Unknown,
		}
	}
}

impl Display for FeatureKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One geometric element of a loaded document.
///
/// `id` is the position of the feature in the document and stays stable until the
/// next document is loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
	pub id: usize,
	pub kind: FeatureKind,
	pub name: Option<String>,
	pub description: Option<String>,
	pub coordinates: CoordinateTree,
	pub altitude: Option<f64>,
	pub style_ref: Option<String>,
	pub folder: Option<String>,
	pub is_annotation: bool,
	/// Ordinal of a marker among the document's points, as numbered by the parser.
	pub point_index: Option<usize>,
}

impl Feature {
	pub fn new(id: usize, kind: FeatureKind, coordinates: impl Into<CoordinateTree>) -> Self {
		Feature {
			id,
			kind,
			name: None,
			description: None,
			coordinates: coordinates.into(),
			altitude: None,
			style_ref: None,
			folder: None,
			is_annotation: false,
			point_index: None,
		}
	}

	#[must_use]
	pub fn with_name(mut self, name: &str) -> Self {
		self.name = Some(name.to_string());
		self
	}

	#[must_use]
	pub fn with_style(mut self, style_ref: &str) -> Self {
		self.style_ref = Some(style_ref.to_string());
		self
	}

	#[must_use]
	pub fn with_folder(mut self, folder: &str) -> Self {
		self.folder = Some(folder.to_string());
		self
	}

	/// Key under which the rendering surface registers the overlay of this feature.
	pub fn overlay_key(&self) -> String {
		overlay_key(self.id)
	}

	pub fn display_name(&self) -> String {
		match &self.name {
			Some(name) if !name.trim().is_empty() => name.clone(),
			_ => format!("Élément {}", self.id + 1),
		}
	}
}

pub fn overlay_key(id: usize) -> String {
	format!("feature_{id}")
}
