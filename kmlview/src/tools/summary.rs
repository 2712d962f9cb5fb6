use anyhow::Result;
use kmlview::{core::Document, summary::summarize};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Parsed document (JSON output of the KML/GPX parser)
	#[arg(required = true)]
	pub filename: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	let document = Document::from_path(&arguments.filename)?;
	Ok(format!("{}\n", summarize(&document)))
}
