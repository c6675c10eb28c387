use serde::Deserialize;
use sift_tui::UiLabels;

use crate::cli::CliArgs;

/// `[ui]` section prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) prompt: Option<String>,
	pub(super) input_placeholder: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) create_label: Option<String>,
	pub(super) results_title: Option<String>,
	pub(super) initial_query: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_query: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(prompt) = cli.prompt.clone() {
			self.prompt = Some(prompt);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(prompt) = self.prompt {
			labels.prompt = prompt;
		}
		if let Some(text) = self.input_placeholder {
			labels.input_placeholder = text;
		}
		if let Some(text) = self.placeholder {
			labels.placeholder = text;
		}
		if let Some(label) = self.create_label {
			labels.create_label = label;
		}
		if let Some(title) = self.results_title {
			labels.results_title = title;
		}

		UiResolution {
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
		}
	}
}
