//! Partitioning of document features into named categories.
//!
//! Documents that declare folders get one category per folder. Otherwise a fixed set
//! of default categories is prepared and every feature is placed by its kind. An
//! explicit `folder` on a feature always wins and creates its category on demand.
//! Every feature ends up in exactly one category, in document order.

use crate::document::{Feature, FeatureKind, FolderInfo, Metadata};
use log::debug;

pub const PLACEMARKS: &str = "Placemarks";
pub const STYLES_AND_MARKUP: &str = "Styles and Markup";
pub const GROUND_OVERLAYS: &str = "Ground Overlays";
pub const SCREEN_OVERLAYS: &str = "Screen Overlays";
pub const PATHS: &str = "Paths";
pub const POLYGONS: &str = "Polygons";

pub const DEFAULT_CATEGORIES: [&str; 6] = [
	PLACEMARKS,
	STYLES_AND_MARKUP,
	GROUND_OVERLAYS,
	SCREEN_OVERLAYS,
	PATHS,
	POLYGONS,
];

/// Category a feature without an explicit folder is placed in.
pub fn category_for_kind(kind: FeatureKind) -> &'static str {
	match kind {
		FeatureKind::Marker | FeatureKind::Unknown => PLACEMARKS,
		FeatureKind::Line => PATHS,
		FeatureKind::Polygon => POLYGONS,
		FeatureKind::GroundOverlay => GROUND_OVERLAYS,
		FeatureKind::ScreenOverlay => SCREEN_OVERLAYS,
	}
}

/// A named group of feature ids, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
	pub name: String,
	pub feature_ids: Vec<usize>,
}

/// Ordered categories. Declared (or default) categories come first, categories created
/// on demand follow in the order they were first needed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Categories(Vec<Category>);

impl Categories {
	fn entry(&mut self, name: &str) -> &mut Category {
		let index = match self.0.iter().position(|c| c.name == name) {
			Some(index) => index,
			None => {
				self.0.push(Category {
					name: name.to_string(),
					feature_ids: Vec::new(),
				});
				self.0.len() - 1
			}
		};
		&mut self.0[index]
	}

	pub fn get(&self, name: &str) -> Option<&Category> {
		self.0.iter().find(|c| c.name == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Category> {
		self.0.iter()
	}

	/// Categories that contain at least one feature. Only these are meant for display.
	pub fn non_empty(&self) -> impl Iterator<Item = &Category> {
		self.0.iter().filter(|c| !c.feature_ids.is_empty())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Name of the category containing the given feature.
	pub fn category_of(&self, feature_id: usize) -> Option<&str> {
		self
			.0
			.iter()
			.find(|c| c.feature_ids.contains(&feature_id))
			.map(|c| c.name.as_str())
	}
}

pub fn categorize(features: &[Feature], metadata: &Metadata) -> Categories {
	let mut categories = Categories::default();

	let folder_names: Vec<&str> = metadata.folders.iter().filter_map(FolderInfo::label).collect();
	if folder_names.is_empty() {
		for name in DEFAULT_CATEGORIES {
			categories.entry(name);
		}
	} else {
		for name in folder_names {
			categories.entry(name);
		}
	}

	for feature in features {
		let target = feature.folder.as_deref().unwrap_or_else(|| category_for_kind(feature.kind));
		categories.entry(target).feature_ids.push(feature.id);
	}

	debug!(
		"categorized {} features into {} categories ({} non-empty)",
		features.len(),
		categories.len(),
		categories.non_empty().count()
	);

	categories
}
