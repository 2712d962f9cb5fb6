use crate::ViewerConfig;
use kmlview_core::{
	Categories, Document, NodeRef, PointNavigator, ResolvedStyle, ToggleOutcome, VisibilityTree, categorize,
	resolve_style,
};
use kmlview_geometry::{PolygonStats, ResolvedPolygon, resolve_geometry, resolve_polygon};
use log::debug;

/// A loaded document together with everything derived from it.
///
/// Loading a new document means creating a new session; nothing carries over.
#[derive(Clone, Debug)]
pub struct ViewerSession {
	document: Document,
	categories: Categories,
	tree: VisibilityTree,
	navigator: PointNavigator,
}

impl ViewerSession {
	pub fn load(document: Document, config: &ViewerConfig) -> Self {
		let categories = categorize(&document.features, &document.metadata);
		let metadata_items: Vec<_> = document
			.metadata
			.displayable_items()
			.into_iter()
			.filter(|item| config.metadata_fields.contains(&item.field))
			.collect();
		let tree = VisibilityTree::build(&document, &categories, &metadata_items);
		let navigator = PointNavigator::new(&document);

		let mut session = ViewerSession {
			document,
			categories,
			tree,
			navigator,
		};
		for name in &config.hidden_categories {
			let outcome = session.tree.toggle(&NodeRef::category(name), false);
			debug!("hid category {name:?} ({} overlays)", outcome.removed_overlay_keys.len());
		}
		session
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	pub fn categories(&self) -> &Categories {
		&self.categories
	}

	pub fn tree(&self) -> &VisibilityTree {
		&self.tree
	}

	pub fn navigator(&self) -> &PointNavigator {
		&self.navigator
	}

	pub fn navigator_mut(&mut self) -> &mut PointNavigator {
		&mut self.navigator
	}

	pub fn toggle(&mut self, node: &NodeRef, checked: bool) -> ToggleOutcome {
		self.tree.toggle(node, checked)
	}

	pub fn click(&mut self, node: &NodeRef) -> ToggleOutcome {
		self.tree.click(node)
	}

	pub fn resolve_style(&self, feature_id: usize) -> Option<ResolvedStyle> {
		let feature = self.document.feature(feature_id)?;
		Some(resolve_style(feature, self.document.style_table()))
	}

	pub fn resolve_polygon(&self, feature_id: usize) -> Option<ResolvedPolygon> {
		resolve_polygon(self.document.feature(feature_id)?)
	}

	pub fn resolve_geometry(&self, feature_id: usize) -> Option<PolygonStats> {
		resolve_geometry(self.document.feature(feature_id)?)
	}
}
