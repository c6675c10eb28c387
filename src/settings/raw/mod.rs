use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod store;
mod ui;

use store::StoreSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	store: StoreSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.store.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			store_entries: detect_source(
				!cli.entries.is_empty(),
				self.store.entries.is_some(),
				"SIFT__STORE__ENTRIES",
				"--entry",
				"store.entries",
			),
			ui_prompt: detect_source(
				cli.prompt.is_some(),
				self.ui.prompt.is_some(),
				"SIFT__UI__PROMPT",
				"--prompt",
				"ui.prompt",
			),
			ui_placeholder: detect_source(
				cli.placeholder.is_some(),
				self.ui.placeholder.is_some(),
				"SIFT__UI__PLACEHOLDER",
				"--placeholder",
				"ui.placeholder",
			),
			ui_initial_query: detect_source(
				cli.initial_query.is_some(),
				self.ui.initial_query.is_some(),
				"SIFT__UI__INITIAL_QUERY",
				"--query",
				"ui.initial_query",
			),
		};

		let entries = self.store.finalize();
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			entries,
			initial_query: ui.initial_query,
			labels: ui.labels,
		};

		config.validate(&sources).map_err(Error::new)?;
		log::debug!("resolved configuration: {config:?}");

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
