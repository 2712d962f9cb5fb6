use anyhow::{Context, Result, bail};
use kmlview::{ViewerConfig, ViewerSession, core::Document, core::NodeRef};
use log::info;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Parsed document (JSON output of the KML/GPX parser)
	#[arg(required = true)]
	pub filename: PathBuf,

	/// Viewer configuration file (YAML)
	#[arg(short = 'c', long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Toggle a node before printing, e.g. "category:Paths=off" or "feature:3=on".
	/// Nodes are "root", "category:<name>", "feature:<id>" or "metadata:<field>".
	/// Can be repeated; toggles are applied in order.
	#[arg(short = 't', long = "toggle", value_name = "NODE=on|off", verbatim_doc_comment)]
	pub toggles: Vec<String>,
}

fn parse_toggle(value: &str) -> Result<(NodeRef, bool)> {
	let (node, state) = value
		.rsplit_once('=')
		.with_context(|| format!("Invalid toggle '{value}'. Expected NODE=on|off"))?;
	let checked = match state.trim().to_lowercase().as_str() {
		"on" | "true" | "1" => true,
		"off" | "false" | "0" => false,
		_ => bail!("Invalid toggle state '{state}'. Expected on or off"),
	};
	Ok((NodeRef::parse_str(node)?, checked))
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	let toggles = arguments
		.toggles
		.iter()
		.map(|t| parse_toggle(t.as_str()))
		.collect::<Result<Vec<_>>>()?;
	let config = ViewerConfig::from_optional_path(arguments.config.as_deref())?;
	let mut session = ViewerSession::load(Document::from_path(&arguments.filename)?, &config);

	for (node, checked) in &toggles {
		let outcome = session.toggle(node, *checked);
		for key in &outcome.added_overlay_keys {
			info!("add overlay {key}");
		}
		for key in &outcome.removed_overlay_keys {
			info!("remove overlay {key}");
		}
	}

	Ok(session.tree().to_string())
}
