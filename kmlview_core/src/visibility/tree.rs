use super::{LeafRef, NodeRef, TriState};
use crate::{
	categorize::{Categories, categorize},
	document::{Document, MetadataField, MetadataItem, overlay_key},
};
use log::{debug, trace, warn};
use std::fmt::Display;

pub const METADATA_CATEGORY: &str = "Métadonnées";

#[derive(Clone, Debug, PartialEq)]
pub struct Leaf {
	pub target: LeafRef,
	pub label: String,
	checked: bool,
}

impl Leaf {
	pub fn state(&self) -> TriState {
		TriState::from_checked(self.checked)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryNode {
	pub name: String,
	state: TriState,
	leaves: Vec<Leaf>,
}

impl CategoryNode {
	pub fn state(&self) -> TriState {
		self.state
	}

	pub fn leaves(&self) -> &[Leaf] {
		&self.leaves
	}

	fn recompute(&mut self) {
		let checked = self.leaves.iter().filter(|l| l.checked).count();
		self.state = TriState::from_counts(checked, self.leaves.len());
	}
}

/// What the UI layer has to apply after a toggle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToggleOutcome {
	/// Every leaf whose value changed, with its new value.
	pub changed_leaves: Vec<(LeafRef, bool)>,
	pub added_overlay_keys: Vec<String>,
	pub removed_overlay_keys: Vec<String>,
	/// Show/hide signals for the metadata panel.
	pub metadata_signals: Vec<(MetadataField, bool)>,
}

impl ToggleOutcome {
	pub fn is_empty(&self) -> bool {
		self.changed_leaves.is_empty()
	}
}

/// The show/hide tree of a loaded document: root, categories, and feature and metadata leaves.
///
/// Leaves hold the only independent values. Category and root states are recomputed from
/// them after every toggle, so a category is `Checked` exactly when all its leaves are,
/// `Unchecked` exactly when none are, and `Indeterminate` otherwise. The same rule holds
/// for the root over all leaves.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTree {
	root: TriState,
	categories: Vec<CategoryNode>,
}

/// Builds a fully checked tree for a freshly loaded document.
pub fn load_document(document: &Document) -> VisibilityTree {
	let categories = categorize(&document.features, &document.metadata);
	VisibilityTree::build(document, &categories, &document.metadata.displayable_items())
}

impl VisibilityTree {
	/// Builds a fully checked tree. Empty categories are left out; metadata items go into
	/// a trailing metadata category.
	pub fn build(document: &Document, categories: &Categories, metadata_items: &[MetadataItem]) -> Self {
		let mut nodes: Vec<CategoryNode> = categories
			.non_empty()
			.map(|category| CategoryNode {
				name: category.name.clone(),
				state: TriState::Checked,
				leaves: category
					.feature_ids
					.iter()
					.map(|id| Leaf {
						target: LeafRef::Feature(*id),
						label: document
							.feature(*id)
							.map_or_else(|| format!("#{id}"), |f| f.display_name()),
						checked: true,
					})
					.collect(),
			})
			.collect();

		if !metadata_items.is_empty() {
			let index = match nodes.iter().position(|c| c.name == METADATA_CATEGORY) {
				Some(index) => index,
				None => {
					nodes.push(CategoryNode {
						name: METADATA_CATEGORY.to_string(),
						state: TriState::Checked,
						leaves: Vec::new(),
					});
					nodes.len() - 1
				}
			};
			nodes[index].leaves.extend(metadata_items.iter().map(|item| Leaf {
				target: LeafRef::Metadata(item.field),
				label: item.value.clone(),
				checked: true,
			}));
		}

		let tree = VisibilityTree {
			root: TriState::Checked,
			categories: nodes,
		};
		debug!(
			"built visibility tree with {} categories and {} leaves",
			tree.categories.len(),
			tree.leaves().count()
		);
		tree
	}

	pub fn root_state(&self) -> TriState {
		self.root
	}

	pub fn categories(&self) -> &[CategoryNode] {
		&self.categories
	}

	pub fn category(&self, name: &str) -> Option<&CategoryNode> {
		self.categories.iter().find(|c| c.name == name)
	}

	pub fn leaves(&self) -> impl Iterator<Item = &Leaf> {
		self.categories.iter().flat_map(|c| c.leaves.iter())
	}

	pub fn leaf(&self, target: LeafRef) -> Option<&Leaf> {
		self.leaves().find(|l| l.target == target)
	}

	/// Current state of any node, `None` if the tree has no such node.
	pub fn state(&self, node: &NodeRef) -> Option<TriState> {
		match node {
			NodeRef::Root => Some(self.root),
			NodeRef::Category(name) => self.category(name).map(CategoryNode::state),
			NodeRef::Leaf(target) => self.leaf(*target).map(Leaf::state),
		}
	}

	/// Overlay keys of all features currently shown.
	pub fn visible_overlay_keys(&self) -> Vec<String> {
		self
			.leaves()
			.filter_map(|leaf| match leaf.target {
				LeafRef::Feature(id) if leaf.checked => Some(overlay_key(id)),
				_ => None,
			})
			.collect()
	}

	/// Sets a node and everything below it to `checked`, then recomputes the ancestors.
	///
	/// References to nodes that do not exist leave the tree untouched and return an
	/// empty outcome.
	pub fn toggle(&mut self, node: &NodeRef, checked: bool) -> ToggleOutcome {
		let mut outcome = ToggleOutcome::default();

		match node {
			NodeRef::Root => {
				for category in &mut self.categories {
					for leaf in &mut category.leaves {
						set_leaf(leaf, checked, &mut outcome);
					}
					category.state = TriState::from_checked(checked);
				}
				self.recompute_root();
			}
			NodeRef::Category(name) => {
				let Some(category) = self.categories.iter_mut().find(|c| &c.name == name) else {
					warn!("ignoring toggle of unknown category {name:?}");
					return outcome;
				};
				for leaf in &mut category.leaves {
					set_leaf(leaf, checked, &mut outcome);
				}
				category.recompute();
				self.recompute_root();
			}
			NodeRef::Leaf(target) => {
				let Some((category, leaf)) = self.categories.iter_mut().find_map(|c| {
					let index = c.leaves.iter().position(|l| l.target == *target)?;
					Some((c, index))
				}) else {
					warn!("ignoring toggle of unknown node {node}");
					return outcome;
				};
				set_leaf(&mut category.leaves[leaf], checked, &mut outcome);
				category.recompute();
				self.recompute_root();
			}
		}

		trace!(
			"toggled {node} to {checked}: {} leaves changed, +{} -{} overlays, root {}",
			outcome.changed_leaves.len(),
			outcome.added_overlay_keys.len(),
			outcome.removed_overlay_keys.len(),
			self.root
		);
		outcome
	}

	/// Checkbox click: a checked node is unchecked, an unchecked or indeterminate node
	/// becomes checked together with everything below it.
	pub fn click(&mut self, node: &NodeRef) -> ToggleOutcome {
		match self.state(node) {
			Some(state) => self.toggle(node, !state.is_checked()),
			None => {
				warn!("ignoring click on unknown node {node}");
				ToggleOutcome::default()
			}
		}
	}

	fn recompute_root(&mut self) {
		let total = self.leaves().count();
		let checked = self.leaves().filter(|l| l.checked).count();
		self.root = TriState::from_counts(checked, total);
	}
}

fn set_leaf(leaf: &mut Leaf, checked: bool, outcome: &mut ToggleOutcome) {
	if leaf.checked == checked {
		return;
	}
	leaf.checked = checked;
	outcome.changed_leaves.push((leaf.target, checked));
	match leaf.target {
		LeafRef::Feature(id) => {
			if checked {
				outcome.added_overlay_keys.push(overlay_key(id));
			} else {
				outcome.removed_overlay_keys.push(overlay_key(id));
			}
		}
		LeafRef::Metadata(field) => outcome.metadata_signals.push((field, checked)),
	}
}

impl Display for VisibilityTree {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "{} All features", self.root)?;
		for category in &self.categories {
			writeln!(f, "  {} {}", category.state, category.name)?;
			for leaf in &category.leaves {
				writeln!(f, "    {} {}", leaf.state(), leaf.label)?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::document::{Feature, FeatureKind, Metadata};
	use pretty_assertions::assert_eq;

	fn document() -> Document {
		Document::new(
			vec![
				Feature::new(0, FeatureKind::Marker, [48.0, 11.0]).with_name("A"),
				Feature::new(0, FeatureKind::Marker, [48.1, 11.1]).with_name("B"),
				Feature::new(0, FeatureKind::Line, [[48.0, 11.0], [48.1, 11.1]]).with_name("Trace"),
				Feature::new(0, FeatureKind::Polygon, [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]),
			],
			Metadata {
				title: Some("Vol".to_string()),
				author: Some("Moi".to_string()),
				..Metadata::default()
			},
		)
	}

	/// Checks the tri-state invariant for every category and the root.
	fn assert_consistent(tree: &VisibilityTree) {
		for category in tree.categories() {
			let checked = category.leaves().iter().filter(|l| l.state().is_checked()).count();
			assert_eq!(
				category.state(),
				TriState::from_counts(checked, category.leaves().len()),
				"category {}",
				category.name
			);
		}
		let total = tree.leaves().count();
		let checked = tree.leaves().filter(|l| l.state().is_checked()).count();
		assert_eq!(tree.root_state(), TriState::from_counts(checked, total));
	}

	#[test]
	fn builds_checked_tree_without_empty_categories() {
		let tree = load_document(&document());
		let names: Vec<&str> = tree.categories().iter().map(|c| c.name.as_str()).collect();
		assert_eq!(names, vec!["Placemarks", "Paths", "Polygons", METADATA_CATEGORY]);
		assert_eq!(tree.root_state(), TriState::Checked);
		assert!(tree.leaves().all(|l| l.state() == TriState::Checked));
		assert_eq!(tree.category("Placemarks").unwrap().leaves()[1].label, "B");
		assert_eq!(tree.category("Polygons").unwrap().leaves()[0].label, "Élément 4");
		assert_eq!(
			tree.category(METADATA_CATEGORY).unwrap().leaves()[1].target,
			LeafRef::Metadata(MetadataField::Author)
		);
		assert_eq!(tree.visible_overlay_keys(), vec!["feature_0", "feature_1", "feature_2", "feature_3"]);
	}

	#[test]
	fn no_metadata_category_without_items() {
		let mut document = document();
		document.metadata = Metadata::default();
		let tree = load_document(&document);
		assert!(tree.category(METADATA_CATEGORY).is_none());
	}

	#[test]
	fn unchecking_one_leaf_makes_ancestors_indeterminate() {
		let mut tree = load_document(&document());

		let outcome = tree.toggle(&NodeRef::feature(1), false);
		assert_eq!(outcome.removed_overlay_keys, vec!["feature_1"]);
		assert!(outcome.added_overlay_keys.is_empty());
		assert_eq!(tree.state(&NodeRef::category("Placemarks")), Some(TriState::Indeterminate));
		assert_eq!(tree.root_state(), TriState::Indeterminate);
		assert_eq!(tree.state(&NodeRef::category("Paths")), Some(TriState::Checked));
		assert_consistent(&tree);

		let outcome = tree.toggle(&NodeRef::feature(1), true);
		assert_eq!(outcome.added_overlay_keys, vec!["feature_1"]);
		assert_eq!(tree.state(&NodeRef::category("Placemarks")), Some(TriState::Checked));
		assert_eq!(tree.root_state(), TriState::Checked);
	}

	#[test]
	fn unchecking_all_leaves_of_a_category() {
		let mut tree = load_document(&document());
		tree.toggle(&NodeRef::feature(0), false);
		tree.toggle(&NodeRef::feature(1), false);
		assert_eq!(tree.state(&NodeRef::category("Placemarks")), Some(TriState::Unchecked));
		assert_eq!(tree.root_state(), TriState::Indeterminate);
		assert_consistent(&tree);
	}

	#[test]
	fn category_toggle() {
		let mut tree = load_document(&document());

		let outcome = tree.toggle(&NodeRef::category("Placemarks"), false);
		assert_eq!(outcome.removed_overlay_keys, vec!["feature_0", "feature_1"]);
		assert_eq!(tree.state(&NodeRef::feature(0)), Some(TriState::Unchecked));
		assert_eq!(tree.state(&NodeRef::feature(2)), Some(TriState::Checked));
		assert_eq!(tree.root_state(), TriState::Indeterminate);
		assert_consistent(&tree);

		let outcome = tree.toggle(&NodeRef::category("Placemarks"), true);
		assert_eq!(outcome.added_overlay_keys, vec!["feature_0", "feature_1"]);
		assert_eq!(tree.root_state(), TriState::Checked);
	}

	#[test]
	fn root_toggle_round_trip() {
		let mut tree = load_document(&document());
		tree.toggle(&NodeRef::feature(2), false);

		let outcome = tree.toggle(&NodeRef::Root, true);
		assert_eq!(outcome.added_overlay_keys, vec!["feature_2"]);
		assert_consistent(&tree);

		let outcome = tree.toggle(&NodeRef::Root, false);
		assert_eq!(
			outcome.removed_overlay_keys,
			vec!["feature_0", "feature_1", "feature_2", "feature_3"]
		);
		assert!(outcome.added_overlay_keys.is_empty());
		assert_eq!(
			outcome.metadata_signals,
			vec![(MetadataField::Title, false), (MetadataField::Author, false)]
		);
		assert!(tree.leaves().all(|l| l.state() == TriState::Unchecked));
		assert!(tree.categories().iter().all(|c| c.state() == TriState::Unchecked));
		assert_eq!(tree.root_state(), TriState::Unchecked);
		assert!(tree.visible_overlay_keys().is_empty());
	}

	#[test]
	fn metadata_leaf_has_no_overlay() {
		let mut tree = load_document(&document());
		let outcome = tree.toggle(&NodeRef::metadata(MetadataField::Title), false);
		assert!(outcome.added_overlay_keys.is_empty());
		assert!(outcome.removed_overlay_keys.is_empty());
		assert_eq!(outcome.metadata_signals, vec![(MetadataField::Title, false)]);
		assert_eq!(tree.state(&NodeRef::category(METADATA_CATEGORY)), Some(TriState::Indeterminate));
		assert_eq!(tree.root_state(), TriState::Indeterminate);
	}

	#[test]
	fn unknown_references_are_noops() {
		let mut tree = load_document(&document());
		let before = tree.clone();

		assert!(tree.toggle(&NodeRef::category("Nope"), false).is_empty());
		assert!(tree.toggle(&NodeRef::feature(99), false).is_empty());
		assert!(tree.toggle(&NodeRef::metadata(MetadataField::Description), false).is_empty());
		assert!(tree.click(&NodeRef::category("Nope")).is_empty());
		assert_eq!(tree, before);
	}

	#[test]
	fn repeated_toggle_issues_no_overlay_calls() {
		let mut tree = load_document(&document());
		let outcome = tree.toggle(&NodeRef::Root, true);
		assert!(outcome.is_empty());
		assert!(outcome.added_overlay_keys.is_empty());
	}

	#[test]
	fn click_on_indeterminate_checks_everything() {
		let mut tree = load_document(&document());
		tree.toggle(&NodeRef::feature(0), false);

		let outcome = tree.click(&NodeRef::category("Placemarks"));
		assert_eq!(outcome.added_overlay_keys, vec!["feature_0"]);
		assert_eq!(tree.state(&NodeRef::category("Placemarks")), Some(TriState::Checked));

		tree.click(&NodeRef::Root);
		assert_eq!(tree.root_state(), TriState::Unchecked);
		tree.toggle(&NodeRef::feature(3), true);
		assert_eq!(tree.root_state(), TriState::Indeterminate);
		tree.click(&NodeRef::Root);
		assert_eq!(tree.root_state(), TriState::Checked);
		assert_consistent(&tree);
	}

	#[test]
	fn empty_document_has_checked_root() {
		let tree = load_document(&Document::default());
		assert!(tree.categories().is_empty());
		assert_eq!(tree.root_state(), TriState::Checked);
	}

	#[test]
	fn root_toggle_on_empty_tree_stays_checked() {
		let mut tree = load_document(&Document::default());
		assert!(tree.toggle(&NodeRef::Root, false).is_empty());
		assert_eq!(tree.root_state(), TriState::Checked);
		assert!(tree.click(&NodeRef::Root).is_empty());
		assert_eq!(tree.root_state(), TriState::Checked);
	}

	#[test]
	fn display() {
		let mut tree = load_document(&document());
		tree.toggle(&NodeRef::feature(1), false);
		assert_eq!(
			tree.to_string(),
			"[-] All features\n  [-] Placemarks\n    [x] A\n    [ ] B\n  [x] Paths\n    [x] Trace\n  [x] Polygons\n    [x] Élément 4\n  [x] Métadonnées\n    [x] Vol\n    [x] Moi\n"
		);
	}
}
