use serde::Deserialize;

use crate::cli::CliArgs;

/// `[store]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct StoreSection {
	/// Seed values; replaces the built-in list when present.
	pub(super) entries: Option<Vec<String>>,
}

impl StoreSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if !cli.entries.is_empty() {
			self.entries = Some(cli.entries.clone());
		}
	}

	pub(super) fn finalize(self) -> Option<Vec<String>> {
		self.entries
	}
}
