use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `sift` binary.
#[derive(Parser, Debug)]
#[command(
	name = "sift",
	version,
	long_version = long_version(),
	about = "Search a list of entries, or create one when nothing matches",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SIFT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long = "entry",
		value_name = "VALUE",
		action = ArgAction::Append,
		help = "Seed the store with this value; repeat to add more (default: built-in list)"
	)]
	pub(crate) entries: Vec<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Start with this query typed into a focused input (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the label shown before the input (default: Search)"
	)]
	pub(crate) prompt: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the text shown while there is nothing to list (default: Start searching...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the session outcome"
	)]
	pub(crate) output: OutputFormat,
}
