use anyhow::Result;
use kmlview::core::{Document, PointBadge, PointNavigator};
use std::{fmt::Write, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Parsed document (JSON output of the KML/GPX parser)
	#[arg(required = true)]
	pub filename: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	let document = Document::from_path(&arguments.filename)?;
	Ok(list_points(&document))
}

pub fn list_points(document: &Document) -> String {
	let mut navigator = PointNavigator::new(document);
	let mut text = String::new();
	for _ in 0..navigator.len() {
		let Some(feature) = navigator.next().and_then(|id| document.feature(id)) else {
			break;
		};
		let badge = PointBadge::of(feature);
		let _ = write!(
			text,
			"{} {} ({} {})",
			navigator.status().unwrap_or_default(),
			feature.display_name(),
			badge.label(),
			badge.color()
		);
		if let Some(altitude) = feature.altitude.filter(|a| *a != 0.0) {
			let _ = write!(text, " alt {}m", altitude.round());
		}
		text.push('\n');
	}
	text
}
