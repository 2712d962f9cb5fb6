mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Show categories and features with their styles and polygon statistics
	Inspect(tools::inspect::Subcommand),

	/// List the navigable points of a document
	Points(tools::points::Subcommand),

	/// Count the features of a document
	Summary(tools::summary::Subcommand),

	/// Apply visibility toggles and show the resulting layer tree
	Tree(tools::tree::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let output = match &cli.command {
		Commands::Inspect(arguments) => tools::inspect::run(arguments)?,
		Commands::Points(arguments) => tools::points::run(arguments)?,
		Commands::Summary(arguments) => tools::summary::run(arguments)?,
		Commands::Tree(arguments) => tools::tree::run(arguments)?,
	};
	print!("{output}");
	Ok(())
}
