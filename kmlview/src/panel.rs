//! The category panel: every category with its features, their resolved paint style and,
//! for polygons, area and perimeter.

use crate::ViewerSession;
use itertools::Itertools;
use kmlview_core::{CategoryNode, FeatureKind, ResolvedStyle, TriState, resolve_style};
use kmlview_geometry::{PolygonStats, resolve_geometry};
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq)]
pub struct PanelEntry {
	pub feature_id: usize,
	pub name: String,
	pub kind: FeatureKind,
	pub style: ResolvedStyle,
	pub stats: Option<PolygonStats>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelCategory {
	pub name: String,
	/// `None` for categories that are not part of the visibility tree (the empty ones).
	pub state: Option<TriState>,
	pub entries: Vec<PanelEntry>,
}

pub fn build_panel(session: &ViewerSession, include_empty: bool) -> Vec<PanelCategory> {
	let document = session.document();
	session
		.categories()
		.iter()
		.filter(|category| include_empty || !category.feature_ids.is_empty())
		.map(|category| PanelCategory {
			name: category.name.clone(),
			state: session.tree().category(&category.name).map(CategoryNode::state),
			entries: category
				.feature_ids
				.iter()
				.filter_map(|id| document.feature(*id))
				.map(|feature| PanelEntry {
					feature_id: feature.id,
					name: feature.display_name(),
					kind: feature.kind,
					style: resolve_style(feature, document.style_table()),
					stats: resolve_geometry(feature),
				})
				.collect(),
		})
		.collect()
}

pub fn render_panel(panel: &[PanelCategory]) -> String {
	let mut text = String::new();
	for category in panel {
		let state = category.state.map_or("   ", |s| s.symbol());
		let _ = writeln!(text, "{state} {} ({})", category.name, category.entries.len());
		for entry in &category.entries {
			let mut parts = vec![
				format!("stroke {}", entry.style.stroke_color),
				format!("fill {}", entry.style.fill_color),
				format!("width {}", entry.style.width),
			];
			if let Some(stats) = &entry.stats {
				parts.push(format!("area {}", stats.formatted_area()));
				parts.push(format!("perimeter {}", stats.formatted_perimeter()));
			}
			let _ = writeln!(
				text,
				"    #{} {} [{}] {}",
				entry.feature_id,
				entry.name,
				entry.kind,
				parts.iter().join(", ")
			);
		}
	}
	text
}
