use anyhow::Result;
use kmlview::{
	ViewerConfig, ViewerSession,
	core::Document,
	panel::{build_panel, render_panel},
};
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
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	let config = ViewerConfig::from_optional_path(arguments.config.as_deref())?;
	let document = Document::from_path(&arguments.filename)?;
	info!("inspecting {:?}", arguments.filename);

	let session = ViewerSession::load(document, &config);
	Ok(render_panel(&build_panel(&session, config.show_empty_categories)))
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn inspect_testdata() {
		run_command(vec!["kmlview", "inspect", "../testdata/flight.json"]).unwrap();
	}

	#[test]
	fn missing_file() {
		let error = run_command(vec!["kmlview", "inspect", "../testdata/missing.json"]).unwrap_err();
		assert!(error.to_string().contains("opening document"));
	}
}
