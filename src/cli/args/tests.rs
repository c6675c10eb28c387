use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::parse_from(["sift"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.entries.is_empty());
	assert!(parsed.initial_query.is_none());
}

#[test]
fn entries_and_configs_accumulate() {
	let parsed = CliArgs::parse_from([
		"sift", "-e", "alpha", "--entry", "beta", "-c", "a.toml", "-c", "b.toml", "-o", "json",
	]);
	assert_eq!(parsed.entries, vec!["alpha", "beta"]);
	assert_eq!(parsed.config.len(), 2);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn theme_flags_are_not_accepted() {
	assert!(CliArgs::try_parse_from(["sift", "--theme", "light"]).is_err());
	assert!(CliArgs::try_parse_from(["sift", "--list-themes"]).is_err());
}
