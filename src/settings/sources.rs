use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::app_dirs;
use crate::cli::CliArgs;

const ENV_PREFIX: &str = "sift";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			log::debug!("consulting config file {}", path.display());
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(environment());

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// `SIFT__UI__PROMPT=...`, `SIFT__STORE__ENTRIES=a,b,c`.
fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.separator("__")
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("store.entries")
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".sift.toml"));
		files.push(current_dir.join("sift.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::ffi::OsString;
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	fn parse_with_configs(paths: &[PathBuf]) -> CliArgs {
		let mut args: Vec<OsString> = vec!["sift".into(), "--no-config".into()];
		for path in paths {
			args.push("--config".into());
			args.push(path.clone().into_os_string());
		}
		CliArgs::parse_from(args)
	}

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".sift.toml")));
		assert!(files.iter().any(|path| path.ends_with("sift.toml")));
	}

	#[test]
	fn explicit_files_are_merged_in_order() {
		let dir = tempdir().expect("tempdir");
		let first = dir.path().join("first.toml");
		let second = dir.path().join("second.toml");
		fs::write(&first, "[ui]\nprompt = \"Tags\"\ncreate_label = \"Add\"\n").expect("write");
		fs::write(&second, "[ui]\nprompt = \"Labels\"\n").expect("write");

		let cli = parse_with_configs(&[first, second]);
		let config = build_config(&cli).expect("config");
		assert_eq!(config.get_string("ui.prompt").expect("prompt"), "Labels");
		assert_eq!(config.get_string("ui.create_label").expect("label"), "Add");
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let dir = tempdir().expect("tempdir");
		let missing = dir.path().join("missing.toml");
		let cli = parse_with_configs(&[missing]);
		assert!(build_config(&cli).is_err());
	}
}
