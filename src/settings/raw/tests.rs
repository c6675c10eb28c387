use clap::Parser;
use sift_tui::UiLabels;

use super::RawConfig;
use crate::cli::CliArgs;

fn parse(toml: &str) -> RawConfig {
	config::Config::builder()
		.add_source(config::File::from_str(toml, config::FileFormat::Toml))
		.build()
		.expect("config")
		.try_deserialize()
		.expect("raw config")
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"sift",
		"--entry",
		"alpha",
		"--entry",
		"beta",
		"--query",
		"al",
		"--prompt",
		"Tags",
		"--placeholder",
		"Type a tag",
	]);

	let mut config = parse("[store]\nentries = [\"file\"]\n[ui]\nprompt = \"Files\"\n");
	config.apply_cli_overrides(&cli);

	assert_eq!(config.store.entries, Some(vec!["alpha".into(), "beta".into()]));
	assert_eq!(config.ui.prompt.as_deref(), Some("Tags"));
	assert_eq!(config.ui.placeholder.as_deref(), Some("Type a tag"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("al"));
}

#[test]
fn file_values_survive_without_cli_flags() {
	let cli = CliArgs::parse_from(["sift"]);
	let mut config = parse(
		"[store]\nentries = [\"Street\", \"Men\"]\n[ui]\ncreate_label = \"Add\"\nresults_title = \"Tags\"\n",
	);
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.entries, Some(vec!["Street".into(), "Men".into()]));
	assert_eq!(resolved.labels.create_label, "Add");
	assert_eq!(resolved.labels.results_title, "Tags");
	assert_eq!(resolved.labels.prompt, UiLabels::default().prompt);
	assert_eq!(resolved.initial_query, "");
}

#[test]
fn empty_config_resolves_to_defaults() {
	let cli = CliArgs::parse_from(["sift"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolves");
	assert_eq!(resolved.entries, None);
	assert_eq!(resolved.labels, UiLabels::default());
}

#[test]
fn blank_entry_from_cli_names_the_flag() {
	let cli = CliArgs::parse_from(["sift", "--entry", "ok", "--entry", " "]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("blank entry");
	let message = format!("{err:#}");
	assert!(message.contains("store.entries"));
	assert!(message.contains("CLI flag `--entry`"));
}

#[test]
fn multiline_query_from_file_is_rejected() {
	let cli = CliArgs::parse_from(["sift"]);
	let config = parse("[ui]\ninitial_query = \"a\\nb\"\n");

	let err = config.resolve(&cli).expect_err("multiline query");
	assert!(err.to_string().contains("configuration key `ui.initial_query`"));
}

#[test]
fn blank_placeholder_from_file_names_the_key() {
	let cli = CliArgs::parse_from(["sift"]);
	let config = parse("[ui]\nplaceholder = \"\"\n");

	let err = config.resolve(&cli).expect_err("blank placeholder");
	assert!(err.to_string().contains("configuration key `ui.placeholder`"));
}
